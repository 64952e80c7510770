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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface. All
//! song data is read from the current session snapshot, nothing here changes
//! it.

mod commander;
pub(crate) mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Tabs},
};

use crate::{
    App,
    model::Tab,
    render::{commander::draw_status_line, player::draw_player},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the tab bar, the search bar, the
/// main area and a single status line. The main area holds the song list and
/// the player panel side by side, or only the player panel when the list is
/// hidden.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    app.search_bar.draw(f, outer[1], &app.theme);

    if app.session.list_visible() {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer[2]);

        app.song_list.draw(f, main[0], &app.session, &app.theme);
        draw_player(f, main[1], app);
    } else {
        draw_player(f, outer[2], app);
    }

    draw_status_line(f, outer[3], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles = Tab::ALL.iter().map(|tab| Line::from(tab.title()));

    let tabs = Tabs::new(titles)
        .select(app.session.tab().index())
        .style(Style::default().fg(app.theme.inactive_tab_fg))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|")
        .block(Block::default().padding(Padding::horizontal(1)));

    f.render_widget(tabs, area);
}
