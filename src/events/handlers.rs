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

use anyhow::Result;
use tracing::{debug, error, info, warn};

use crate::{
    App,
    model::{Song, session::Intent},
    player::PlayerState,
    tasks::AppTask,
    theme::Theme,
    util,
};

/// Applies an intent to the session and runs whatever side effects the new
/// snapshot calls for.
pub(super) fn dispatch(app: &mut App, intent: Intent) -> Result<()> {
    let previous = app.session.selection();

    app.session = std::mem::take(&mut app.session).update(intent);
    app.song_list.sync(&app.session.visible());
    app.search_bar.sync(app.session.search_text());

    if app.session.selection() != previous {
        handle_selection_changed(app)?;
    }

    Ok(())
}

/// What the player should do for a newly selected song.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum PlaybackAction<'a> {
    Play(&'a Song),
    Unplayable(&'a Song),
    Stop,
}

pub(super) fn playback_action(selected: Option<&Song>) -> PlaybackAction<'_> {
    match selected {
        Some(song) if song.url.trim().is_empty() => PlaybackAction::Unplayable(song),
        Some(song) => PlaybackAction::Play(song),
        None => PlaybackAction::Stop,
    }
}

/// An end of stream only advances the list when it belongs to the song that
/// is selected now, one queued from the previous stream is stale.
pub(super) fn is_current_stream(selected: Option<&Song>, url: &str) -> bool {
    selected.is_some_and(|song| song.url == url)
}

fn handle_selection_changed(app: &mut App) -> Result<()> {
    app.player_time = None;
    app.player_duration = None;
    app.player_position = None;

    update_terminal_background(app);

    match playback_action(app.session.selected_song()) {
        PlaybackAction::Unplayable(song) => {
            warn!(id = %song.id, "Selected song has no stream url");
            app.status_message = Some(format!("\"{}\" has no playable stream", song.name));
            app.audio_player.stop()?;
        }
        PlaybackAction::Play(song) => {
            info!(id = %song.id, name = %song.name, artist = %song.artist, "Playing song");
            app.status_message = None;
            app.audio_player.play_url(&song.url)?;
        }
        PlaybackAction::Stop => app.audio_player.stop()?,
    }

    Ok(())
}

/// Applies the search bar's text to the session as soon as the bar has
/// consumed a key.
pub(super) fn handle_search_edited(app: &mut App) -> Result<()> {
    match app.search_bar.pending_search(app.session.search_text()) {
        Some(text) => dispatch(app, Intent::SetSearchText(text)),
        None => Ok(()),
    }
}

/// Tints the whole terminal with the selected song's accent colour, falling
/// back to the theme background.
fn update_terminal_background(app: &App) {
    let colour = app
        .session
        .selected_song()
        .and_then(|song| Theme::parse_hex(&song.accent))
        .unwrap_or(app.theme.background_colour);

    if let Some(hex) = Theme::to_hex(colour) {
        util::term::set_terminal_bg(&hex);
    }
}

pub(super) fn handle_fetch_catalog(app: &mut App) -> Result<()> {
    if !app.session.status().can_fetch() {
        debug!("Catalog fetch already in progress");
        return Ok(());
    }

    dispatch(app, Intent::FetchStarted)?;
    app.task_tx.send(AppTask::FetchCatalog)?;

    Ok(())
}

pub(super) fn handle_catalog_loaded(app: &mut App, songs: Vec<Song>) -> Result<()> {
    info!(count = songs.len(), "Catalog ready");
    dispatch(app, Intent::CatalogLoaded(songs))
}

pub(super) fn handle_catalog_failed(app: &mut App, message: String) -> Result<()> {
    error!(%message, "Catalog unavailable");
    dispatch(app, Intent::CatalogFailed(message))
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_title_changed(app: &mut App, title: String) {
    debug!(%title, "Stream title");
    app.player_track_name = Some(title);
}

pub(super) fn handle_duration_changed(app: &mut App, dur: u64) {
    app.player_duration = Some(dur);
}

pub(super) fn handle_volume_changed(app: &mut App, vol: u32) {
    app.volume = Some(vol);
}

/// Auto-advance to the next visible song.
pub(super) fn handle_track_finished(app: &mut App, url: String) -> Result<()> {
    if !is_current_stream(app.session.selected_song(), &url) {
        debug!(%url, "Ignoring end of a stream that is no longer selected");
        return Ok(());
    }

    app.player_time = app.player_duration;
    dispatch(app, Intent::Next)
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.player_time = Some(seconds as u64);
    if let Some(duration) = app.player_duration {
        app.player_position = if duration > 0 {
            Some(seconds / duration as f64)
        } else {
            None
        };
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Application error");
    app.status_message = Some(message);
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    error!(%message, "Fatal application error");
    app.status_message = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}
