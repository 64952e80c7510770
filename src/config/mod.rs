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

//! Application configuration.
//!
//! This module manages the application configuration file: where the song
//! catalog is fetched from, where cover art lives, and how patient the
//! catalog fetch is.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

pub(crate) const CONFIG_NAME: &str = "songdeck";

const DEFAULT_CATALOG_URL: &str = "https://cms.samespace.com/items/songs";
const DEFAULT_ASSET_BASE_URL: &str = "https://cms.samespace.com/assets/";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub catalog_url: String,
    pub asset_base_url: String,
    pub request_timeout_secs: u64,
    pub fetch_attempts: u32,
    pub retry_backoff_ms: u64,
    pub stream_cache_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            request_timeout_secs: 10,
            fetch_attempts: 3,
            retry_backoff_ms: 500,
            stream_cache_secs: 30,
        }
    }
}

impl AppConfig {
    pub(crate) fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub(crate) fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Directory holding the configuration file, also used for the log file.
pub fn config_dir() -> Result<PathBuf, confy::ConfyError> {
    let path = confy::get_configuration_file_path(CONFIG_NAME, None)?;
    Ok(path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(std::env::temp_dir))
}
