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

//! Render the player panel.
//!
//! This module renders the selected song, its cover art location, playback
//! progress and volume. The panel is painted in the song's accent colour
//! when the catalog supplies a usable one.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    theme::Theme,
    util,
};

const MAX_VOLUME: f64 = 130.0;

/// Renders the player panel for the current selection.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let song = app.session.selected_song();

    let panel_colour = song
        .and_then(|song| Theme::parse_hex(&song.accent))
        .unwrap_or(app.theme.background_colour);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .style(Style::default().bg(panel_colour))
        .padding(Padding::uniform(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let Some(song) = song else {
        let idle = Paragraph::new("Nothing playing")
            .style(Style::default().fg(app.theme.placeholder_fg))
            .alignment(Alignment::Center);
        f.render_widget(idle, inner_area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let name_line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(&song.name, Style::default().add_modifier(Modifier::BOLD)),
    ])
    .fg(Color::White);
    f.render_widget(Paragraph::new(name_line), chunks[0]);

    f.render_widget(Paragraph::new(song.artist.as_str()).fg(Color::White), chunks[1]);

    let cover = song.cover_url(&app.config.asset_base_url);
    if !cover.is_empty() {
        let cover_line = Line::from(vec![Span::raw("Cover: "), Span::raw(cover)]).fg(Color::White);
        f.render_widget(Paragraph::new(cover_line), chunks[2]);
    }

    if let Some(title) = app.player_track_name.as_deref().filter(|t| *t != song.name) {
        let stream_line = Line::from(vec![Span::raw("Stream: "), Span::raw(title)]).fg(Color::White);
        f.render_widget(Paragraph::new(stream_line), chunks[3]);
    }

    let duration = app.player_duration.unwrap_or(0);
    let time = app.player_time.unwrap_or(0);
    let remaining = duration.saturating_sub(time);

    let time_line = Line::from(vec![
        Span::raw(util::format::format_time(time)),
        Span::raw(" / "),
        Span::raw(util::format::format_time(duration)),
        Span::raw(" (-"),
        Span::raw(util::format::format_time(remaining)),
        Span::raw(")"),
    ])
    .fg(Color::White)
    .bold();
    f.render_widget(Paragraph::new(time_line).alignment(Alignment::Right), chunks[5]);

    let position = app.player_position.unwrap_or(0.0).clamp(0.0, 1.0);

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);
    f.render_widget(position_gauge, chunks[6]);

    let volume = app.volume.unwrap_or(0);
    let vol_ratio = (volume as f64 / MAX_VOLUME).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(chunks[7]);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[1]);
}
