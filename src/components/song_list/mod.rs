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

//! Interactive song list widget state.
//!
//! This module keeps the cursor of the song table in step with the visible
//! list of the session. The cursor is only a browsing position; the playing
//! song is the session selection, changed when the user activates a row.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{Song, SongId};

pub(crate) struct SongList {
    pub(crate) table_state: TableState,
    ids: Vec<SongId>,
}

impl SongList {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
            ids: vec![],
        }
    }

    /// Re-aligns the cursor with a freshly derived visible list.
    ///
    /// The cursor stays on the same song when it is still visible, otherwise
    /// it is clamped into range.
    pub(crate) fn sync(&mut self, visible: &[&Song]) {
        let current = self.cursor_id();
        let previous_index = self.table_state.selected();

        self.ids = visible.iter().map(|s| s.id).collect();

        let index = if self.ids.is_empty() {
            None
        } else if let Some(i) = current.and_then(|id| self.ids.iter().position(|v| *v == id)) {
            Some(i)
        } else {
            Some(previous_index.unwrap_or(0).min(self.ids.len() - 1))
        };

        self.table_state.select(index);
    }

    pub(crate) fn cursor_id(&self) -> Option<SongId> {
        self.table_state
            .selected()
            .and_then(|i| self.ids.get(i))
            .copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    fn goto_next(&mut self) {
        let len = self.ids.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.ids.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.ids.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.ids.is_empty() {
            self.table_state.select(Some(self.ids.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SongList;
    use crate::model::{SongId, test_support::song};

    #[test]
    fn cursor_starts_on_first_song() {
        let songs = [song(1, "Alpha", "A", true), song(2, "Beta", "B", false)];
        let mut list = SongList::new();
        list.sync(&songs.iter().collect::<Vec<_>>());
        assert_eq!(list.cursor_id(), Some(SongId(1)));
    }

    #[test]
    fn cursor_follows_its_song_through_filtering() {
        let songs = [
            song(1, "Alpha", "A", true),
            song(2, "Beta", "B", false),
            song(3, "Gamma", "C", true),
        ];
        let mut list = SongList::new();
        list.sync(&songs.iter().collect::<Vec<_>>());
        list.goto_last();
        assert_eq!(list.cursor_id(), Some(SongId(3)));

        let top: Vec<_> = songs.iter().filter(|s| s.top_track).collect();
        list.sync(&top);
        assert_eq!(list.cursor_id(), Some(SongId(3)));
        assert_eq!(list.table_state.selected(), Some(1));
    }

    #[test]
    fn cursor_is_clamped_or_cleared() {
        let songs = [song(1, "Alpha", "A", true), song(2, "Beta", "B", false)];
        let mut list = SongList::new();
        list.sync(&songs.iter().collect::<Vec<_>>());
        list.goto_next();

        list.sync(&[&songs[0]]);
        assert_eq!(list.cursor_id(), Some(SongId(1)));

        list.sync(&[]);
        assert_eq!(list.cursor_id(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn cursor_wraps_around() {
        let songs = [song(1, "Alpha", "A", true), song(2, "Beta", "B", false)];
        let mut list = SongList::new();
        list.sync(&songs.iter().collect::<Vec<_>>());

        list.goto_previous();
        assert_eq!(list.cursor_id(), Some(SongId(2)));
        list.goto_next();
        assert_eq!(list.cursor_id(), Some(SongId(1)));
    }
}
