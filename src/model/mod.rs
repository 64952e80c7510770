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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the songs of
//! the remote catalog and the tabs used to view them, together with the
//! session view-model built on top of them.

pub(crate) mod catalog;
pub(crate) mod session;

use std::fmt;

/// Identifier of a song, unique within the fetched catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct SongId(pub(crate) i64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Song {
    pub(crate) id: SongId,
    pub(crate) name: String,
    pub(crate) artist: String,
    pub(crate) cover: String,
    pub(crate) url: String,
    pub(crate) accent: String,
    pub(crate) top_track: bool,
}

impl Song {
    /// Resolves the cover asset identifier against the asset base URL.
    pub(crate) fn cover_url(&self, asset_base_url: &str) -> String {
        if self.cover.is_empty() {
            return String::new();
        }

        if asset_base_url.ends_with('/') {
            format!("{}{}", asset_base_url, self.cover)
        } else {
            format!("{}/{}", asset_base_url, self.cover)
        }
    }

    /// Case-insensitive match of an already lower-cased needle against the
    /// song name or artist.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.artist.to_lowercase().contains(needle)
    }
}

/// The two mutually exclusive views of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Tab {
    #[default]
    ForYou,
    TopTracks,
}

impl Tab {
    pub(crate) const ALL: [Tab; 2] = [Tab::ForYou, Tab::TopTracks];

    pub(crate) fn identifier(self) -> &'static str {
        match self {
            Tab::ForYou => "for_you",
            Tab::TopTracks => "top_tracks",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            Tab::ForYou => "For You",
            Tab::TopTracks => "Top Tracks",
        }
    }

    pub(crate) fn from_identifier(identifier: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|tab| tab.identifier() == identifier)
    }

    pub(crate) fn toggled(self) -> Self {
        match self {
            Tab::ForYou => Tab::TopTracks,
            Tab::TopTracks => Tab::ForYou,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Tab::ForYou => 0,
            Tab::TopTracks => 1,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Song, SongId};

    pub(crate) fn song(id: i64, name: &str, artist: &str, top_track: bool) -> Song {
        Song {
            id: SongId(id),
            name: name.to_string(),
            artist: artist.to_string(),
            cover: format!("cover-{}", id),
            url: format!("https://example.test/{}.mp3", id),
            accent: "#331E00".to_string(),
            top_track,
        }
    }
}
