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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and the
//! hexadecimal strings used both by the song catalog (accent colours) and by
//! terminal emulator escape sequences.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,
    pub(crate) commander_colour: Color,

    pub(crate) placeholder_fg: Color,
    pub(crate) inactive_tab_fg: Color,
    pub(crate) error_fg: Color,

    pub(crate) table_name_fg: Color,
    pub(crate) table_artist_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(20, 20, 20),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(50, 50, 50),
            commander_colour: Color::Rgb(255, 255, 255),

            placeholder_fg: Color::Rgb(120, 120, 120),
            inactive_tab_fg: Color::Rgb(162, 161, 166),
            error_fg: Color::Rgb(239, 83, 80),

            table_name_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only [`Color::Rgb`] has a hex form, other
    /// variants give `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }

    /// Parses a `#rrggbb` (or `rrggbb`) string into a colour.
    ///
    /// Catalog accent colours come from the server as free text, anything
    /// that does not parse is ignored by the caller.
    pub(crate) fn parse_hex(hex: &str) -> Option<Color> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::Theme;

    #[test]
    fn hex_round_trips_rgb() {
        assert_eq!(Theme::to_hex(Color::Rgb(51, 30, 0)).as_deref(), Some("#331e00"));
        assert_eq!(Theme::parse_hex("#331E00"), Some(Color::Rgb(51, 30, 0)));
        assert_eq!(Theme::parse_hex("331e00"), Some(Color::Rgb(51, 30, 0)));
    }

    #[test]
    fn non_rgb_colours_have_no_hex() {
        assert_eq!(Theme::to_hex(Color::Red), None);
    }

    #[test]
    fn malformed_accents_are_rejected() {
        assert_eq!(Theme::parse_hex(""), None);
        assert_eq!(Theme::parse_hex("#abc"), None);
        assert_eq!(Theme::parse_hex("#zzzzzz"), None);
        assert_eq!(Theme::parse_hex("#ééé"), None);
    }
}
