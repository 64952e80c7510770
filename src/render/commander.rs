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

//! Render the bottom line of the screen.
//!
//! While the command-line is active the line shows the text being typed and
//! the cursor. Otherwise it reports the catalog status, the latest message
//! or a short key reminder.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINT: &str = "q quit | / search | 1 2 tabs | n p next/prev | space pause | : command";

pub(crate) fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let commander = &app.commander;

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value())).style(
                Style::default()
                    .fg(app.theme.commander_colour)
                    .bg(app.theme.gauge_track_colour),
            ),
            container[0],
        );

        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        f.set_cursor_position((cursor_x, container[0].y));
        return;
    }

    let status = app.session.status();

    let (text, style) = if status.is_loading() {
        ("Loading...".to_string(), Style::default().fg(app.theme.accent_colour))
    } else if let Some(message) = status.error() {
        (format!("Error: {}", message), Style::default().fg(app.theme.error_fg))
    } else if let Some(message) = &app.status_message {
        (message.clone(), Style::default().fg(app.theme.error_fg))
    } else {
        (KEY_HINT.to_string(), Style::default().fg(app.theme.placeholder_fg))
    };

    f.render_widget(Paragraph::new(text).style(style), container[0]);
}
