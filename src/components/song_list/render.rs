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

//! UI rendering logic for the song list.
//!
//! This module handles the visual representation of the visible list,
//! including column layout, the now-playing marker, and theme application
//! using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::SongList,
    model::session::Session,
    render::icons::{ICON_PLAY, ICON_TOP_TRACK},
    theme::Theme,
};

impl SongList {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, session: &Session, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = format!(
            "{} | {} of {} songs",
            session.tab().title(),
            self.len(),
            session.catalog().len()
        );
        if !session.search_text().is_empty() {
            header_text.push_str(&format!(" matching \"{}\"", session.search_text()));
        }

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        let visible = session.visible();

        if visible.is_empty() {
            let empty = Paragraph::new("No songs")
                .style(Style::default().fg(theme.placeholder_fg))
                .block(Block::default().padding(Padding::horizontal(1)));
            f.render_widget(empty, chunks[1]);
            return;
        }

        let playing = session.selection();

        let rows = visible.iter().map(|song| {
            let marker = if Some(song.id) == playing {
                Line::from(ICON_PLAY).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let top = if song.top_track {
                Line::from(ICON_TOP_TRACK).style(Style::default().fg(theme.accent_colour))
            } else {
                Line::from("")
            };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(Line::from(song.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(song.artist.as_str()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(top),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Percentage(55),
                Constraint::Percentage(40),
                Constraint::Length(2),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from("Song"),
                Cell::from("Artist"),
                Cell::from(""),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, chunks[1], &mut self.table_state);
    }
}
