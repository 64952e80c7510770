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

//! Command-line input logic and state management.
//!
//! This module implements a vi-style command-line: `:` opens it, `Enter`
//! submits the typed command and `Esc` abandons it. A submitted command is
//! parsed into the application event it stands for and posted to the event
//! loop, so commands and key bindings share the same code paths.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    events::AppEvent,
    model::{Tab, session::Intent},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Unknown tab: {0} (expected for_you or top_tracks)")]
    UnknownTab(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` when the event was consumed by the command-line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => self.close(),

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();

                if !buffer.is_empty() {
                    let event = parse_command(&buffer).unwrap_or_else(|e| AppEvent::Error(e.to_string()));
                    debug!(command = %buffer, "Command submitted");
                    let _ = event_tx.send(event);
                }
            }

            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }
}

/// Parses a command-line buffer, without the leading `:`, into the event it
/// requests.
pub(crate) fn parse_command(buffer: &str) -> Result<AppEvent, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        ["q"] => AppEvent::ExitApplication,

        ["tab", identifier] => match Tab::from_identifier(identifier) {
            Some(tab) => AppEvent::Intent(Intent::SetTab(tab)),
            None => return Err(CommandError::UnknownTab(identifier.to_string())),
        },
        ["tab", ..] => return Err(CommandError::Usage(":tab for_you|top_tracks")),

        ["find"] => return Err(CommandError::Usage(":find <text>")),
        ["find", ..] => AppEvent::Intent(Intent::SetSearchText(command_argument(buffer, "find"))),

        ["clear"] => AppEvent::Intent(Intent::SetSearchText(String::new())),

        ["next"] => AppEvent::Intent(Intent::Next),
        ["prev"] => AppEvent::Intent(Intent::Previous),

        ["list"] => AppEvent::Intent(Intent::ToggleListVisibility),

        ["reload"] => AppEvent::FetchCatalog,

        _ => return Err(CommandError::Unknown(buffer.to_string())),
    };

    Ok(event)
}

/// The raw text following `name`, with inner spacing kept as typed.
fn command_argument(buffer: &str, name: &str) -> String {
    buffer
        .trim()
        .strip_prefix(name)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::{CommandError, Commander, parse_command};
    use crate::{
        events::AppEvent,
        model::{Tab, session::Intent},
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_every_command() {
        assert!(matches!(parse_command("q"), Ok(AppEvent::ExitApplication)));
        assert!(matches!(
            parse_command("tab top_tracks"),
            Ok(AppEvent::Intent(Intent::SetTab(Tab::TopTracks)))
        ));
        assert!(matches!(
            parse_command("tab for_you"),
            Ok(AppEvent::Intent(Intent::SetTab(Tab::ForYou)))
        ));
        assert!(matches!(parse_command("next"), Ok(AppEvent::Intent(Intent::Next))));
        assert!(matches!(parse_command("prev"), Ok(AppEvent::Intent(Intent::Previous))));
        assert!(matches!(
            parse_command("list"),
            Ok(AppEvent::Intent(Intent::ToggleListVisibility))
        ));
        assert!(matches!(parse_command("reload"), Ok(AppEvent::FetchCatalog)));
    }

    #[test]
    fn find_keeps_the_text_as_typed() {
        match parse_command("find  Daft   Punk") {
            Ok(AppEvent::Intent(Intent::SetSearchText(text))) => assert_eq!(text, "Daft   Punk"),
            other => panic!("unexpected {:?}", other),
        }

        match parse_command("  find a  b ") {
            Ok(AppEvent::Intent(Intent::SetSearchText(text))) => assert_eq!(text, "a  b"),
            other => panic!("unexpected {:?}", other),
        }

        match parse_command("clear") {
            Ok(AppEvent::Intent(Intent::SetSearchText(text))) => assert!(text.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_commands() {
        assert_eq!(
            parse_command("tab favourites").err(),
            Some(CommandError::UnknownTab("favourites".to_string()))
        );
        assert_eq!(parse_command("tab").err(), Some(CommandError::Usage(":tab for_you|top_tracks")));
        assert_eq!(parse_command("find").err(), Some(CommandError::Usage(":find <text>")));
        assert_eq!(parse_command("dance").err(), Some(CommandError::Unknown("dance".to_string())));
    }

    #[test]
    fn submitting_posts_the_command_and_closes() {
        let mut commander = Commander::new();
        let (tx, rx) = mpsc::channel();

        assert!(!commander.handle_event(&key(KeyCode::Char('q')), &tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        commander.handle_event(&key(KeyCode::Char('q')), &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert!(!commander.active());
        assert!(commander.input.value().is_empty());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn unknown_commands_surface_as_errors() {
        let mut commander = Commander::new();
        let (tx, rx) = mpsc::channel();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('x')), &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        match rx.try_recv() {
            Ok(AppEvent::Error(message)) => assert_eq!(message, "Unknown command: x"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn escape_abandons_the_command() {
        let mut commander = Commander::new();
        let (tx, rx) = mpsc::channel();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('q')), &tx);
        commander.handle_event(&key(KeyCode::Esc), &tx);

        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn typed_find_reaches_the_session_with_its_spacing() {
        let mut commander = Commander::new();
        let (tx, rx) = mpsc::channel();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        for c in "find a  b".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &tx);
        }
        commander.handle_event(&key(KeyCode::Enter), &tx);

        match rx.try_recv() {
            Ok(AppEvent::Intent(Intent::SetSearchText(text))) => assert_eq!(text, "a  b"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
