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

//! Event routing for the search bar.
//!
//! While focused the bar consumes every key: `Esc` and `Enter` give focus
//! back, everything else edits the text.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SearchBar,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for SearchBar {
    fn process_event(&mut self, event: &Event, _event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Enter => self.is_active = false,

            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}
