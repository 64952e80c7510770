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

//! Search bar text input.
//!
//! The bar owns the raw text as typed, the session keeps its own lower-cased
//! copy. Edits are applied to the session by the key handler straight after
//! the bar has consumed a key, never queued, so the two cannot drift apart.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchBar {
    pub(crate) input: Input,
    pub(crate) is_active: bool,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: false,
        }
    }

    pub(crate) fn focus(&mut self) {
        self.is_active = true;
    }

    /// The search text to apply when the typed text no longer matches the
    /// session's.
    pub(crate) fn pending_search(&self, search_text: &str) -> Option<String> {
        let value = self.input.value();
        (value.to_lowercase() != search_text).then(|| value.to_string())
    }

    /// Replaces the input text when the session search changed from
    /// somewhere else, such as the command line.
    pub(crate) fn sync(&mut self, search_text: &str) {
        if self.input.value().to_lowercase() != search_text {
            self.input = Input::new(search_text.to_string());
        }
    }
}
