// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Bookkeeping for remote streams handed to MPV.
//!
//! MPV reports the end of a file without saying which file it was. Loads are
//! queued here when issued and promoted when MPV starts the file, so an end
//! of stream can be tagged with the URL that actually finished.

use std::collections::VecDeque;

#[derive(Debug, Default)]
pub(crate) struct StreamTracker {
    queued: VecDeque<String>,
    current: Option<String>,
}

impl StreamTracker {
    /// A `loadfile` for `url` was accepted.
    pub(crate) fn loading(&mut self, url: String) {
        self.queued.push_back(url);
    }

    /// MPV started the oldest queued file.
    pub(crate) fn started(&mut self) {
        self.current = self.queued.pop_front();
    }

    /// The current file ended; returns its URL when one was playing.
    pub(crate) fn ended(&mut self) -> Option<String> {
        self.current.take()
    }

    /// Playback was stopped and the playlist cleared.
    pub(crate) fn stopped(&mut self) {
        self.queued.clear();
        self.current = None;
    }
}
