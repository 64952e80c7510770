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

//! Interactive view components.
//!
//! Each component keeps its own transient UI state (cursor position, text
//! input), routes the key events it understands, and draws itself. Changes to
//! the session itself are never made here, they are posted as
//! [`crate::model::session::Intent`]s instead.

mod search;
mod song_list;

pub(crate) use search::SearchBar;
pub(crate) use song_list::SongList;
