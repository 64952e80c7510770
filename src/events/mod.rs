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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog fetch, audio player), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function turns events into session
//!    [`Intent`]s, applies them, and performs the resulting side effects such
//!    as starting playback of a newly selected song.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
use handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    model::{Song, Tab, session::Intent},
    player::PlayerState,
    render::draw,
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Intent(Intent),

    FetchCatalog,
    CatalogLoaded(Vec<Song>),
    CatalogFailed(String),

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    TrackFinished(String),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    /// Returns `true` when the event was consumed.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Intent(intent) => dispatch(app, intent)?,
            AppEvent::FetchCatalog => handle_fetch_catalog(app)?,
            AppEvent::CatalogLoaded(songs) => handle_catalog_loaded(app, songs)?,
            AppEvent::CatalogFailed(message) => handle_catalog_failed(app, message)?,
            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::TitleChanged(title) => handle_title_changed(app, title),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(secs) => handle_time_changed(app, secs),
            AppEvent::VolumeChanged(volume) => handle_volume_changed(app, volume),
            AppEvent::TrackFinished(url) => handle_track_finished(app, url)?,
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => handle_fatal_error(app, message),
            AppEvent::Tick | AppEvent::ExitApplication => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions and playback commands.
///
/// Input is offered, in order, to the search bar (when it has focus), the
/// command line, the song list (when it is shown), and finally the global key
/// bindings.
///
/// # Errors
///
/// Returns an error if a command fails to send to a background worker or if
/// a requested action cannot be executed.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.search_bar.process_event(&event, &app.event_tx)? {
        return handle_search_edited(app);
    }

    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if app.session.list_visible() && app.song_list.process_event(&event, &app.event_tx)? {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        // Tabs
        KeyCode::Char('1') => dispatch(app, Intent::SetTab(Tab::ForYou))?,
        KeyCode::Char('2') => dispatch(app, Intent::SetTab(Tab::TopTracks))?,
        KeyCode::Tab => {
            let tab = app.session.tab().toggled();
            dispatch(app, Intent::SetTab(tab))?
        }

        KeyCode::Char('/') => app.search_bar.focus(),
        KeyCode::Char('v') => dispatch(app, Intent::ToggleListVisibility)?,
        KeyCode::Char('r') => handle_fetch_catalog(app)?,

        // Transport
        KeyCode::Char('n') => dispatch(app, Intent::Next)?,
        KeyCode::Char('p') => dispatch(app, Intent::Previous)?,
        KeyCode::Char(' ') => app.audio_player.toggle_pause()?,
        KeyCode::Char('s') => app.audio_player.stop()?,

        KeyCode::Char(',') => app.audio_player.seek(-FINE_SEEK_DELTA)?,
        KeyCode::Char('.') => app.audio_player.seek(FINE_SEEK_DELTA)?,
        KeyCode::Char('<') => app.audio_player.seek(-SEEK_DELTA)?,
        KeyCode::Char('>') => app.audio_player.seek(SEEK_DELTA)?,
        KeyCode::Char('-') => app.audio_player.adjust_volume(-FINE_VOLUME_DELTA)?,
        KeyCode::Char('=') => app.audio_player.adjust_volume(FINE_VOLUME_DELTA)?,
        KeyCode::Char('_') => app.audio_player.adjust_volume(-VOLUME_DELTA)?,
        KeyCode::Char('+') => app.audio_player.adjust_volume(VOLUME_DELTA)?,
        KeyCode::Char('m') => app.audio_player.toggle_mute()?,

        _ => {}
    }

    Ok(())
}
