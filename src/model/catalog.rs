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

//! Catalog loading lifecycle.
//!
//! This module provides the state of the remote catalog fetch, from the
//! moment the session starts until the fetch settles.

/// Loading lifecycle of the song catalog.
///
/// `Idle -> Loading -> Ready`, or `Loading -> Failed`. A fetch may be issued
/// again from `Ready` or `Failed`, never while one is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl CatalogStatus {
    pub(crate) fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    pub(crate) fn error(&self) -> Option<&str> {
        match self {
            CatalogStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub(crate) fn can_fetch(&self) -> bool {
        !self.is_loading()
    }
}
