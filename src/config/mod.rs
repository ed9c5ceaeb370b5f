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
//! This module manages the configuration file holding the display defaults:
//! which date formatter to use, the default date pattern and the code prefix
//! applied by the slugifier.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::date::{DEFAULT_DATE_FORMAT, DateFormatter};

const CONFIG_NAME: &str = "portal-text";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Load(#[source] confy::ConfyError),

    #[error("Failed to write configuration: {0}")]
    Store(#[source] confy::ConfyError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub date_format: String,
    pub date_formatter: DateFormatter,
    pub slug_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_formatter: DateFormatter::default(),
            slug_prefix: String::new(),
        }
    }
}

/// Loads the configuration from the platform's config directory.
///
/// A missing or unreadable file yields the defaults.
pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!(error = %e, "Could not load configuration, using defaults");
        AppConfig::default()
    })
}

/// Loads the configuration from an explicit path.
///
/// A missing file is created with the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Load`] if the file exists but cannot be read or
/// parsed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    confy::load_path(path).map_err(ConfigError::Load)
}

pub fn save_config_to(path: &Path, cfg: &AppConfig) -> Result<(), ConfigError> {
    confy::store_path(path, cfg).map_err(ConfigError::Store)
}
