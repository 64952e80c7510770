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

//! Input handling for the song list.
//!
//! Cursor movement is handled locally; activating a row posts a song
//! selection to the application.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::SongList,
    events::{AppEvent, AppEventProcessor},
    model::session::Intent,
};

impl AppEventProcessor for SongList {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Enter => {
                if let Some(id) = self.cursor_id() {
                    event_tx.send(AppEvent::Intent(Intent::SelectSong(id)))?;
                }
            }

            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use crate::{
        components::SongList,
        events::{AppEvent, AppEventProcessor},
        model::{SongId, session::Intent, test_support::song},
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_selects_the_song_under_the_cursor() {
        let songs = [song(1, "Alpha", "A", true), song(2, "Beta", "B", false)];
        let mut list = SongList::new();
        list.sync(&songs.iter().collect::<Vec<_>>());
        let (tx, rx) = mpsc::channel();

        assert!(list.process_event(&key(KeyCode::Down), &tx).unwrap());
        assert!(list.process_event(&key(KeyCode::Enter), &tx).unwrap());

        match rx.try_recv().unwrap() {
            AppEvent::Intent(Intent::SelectSong(id)) => assert_eq!(id, SongId(2)),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn unrelated_keys_fall_through() {
        let mut list = SongList::new();
        let (tx, _rx) = mpsc::channel();
        assert!(!list.process_event(&key(KeyCode::Char('n')), &tx).unwrap());
    }
}
