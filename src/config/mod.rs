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
//! The configuration file is optional and read-only: it is loaded if it
//! already exists and is never created or written, so by default the
//! application touches no files at all.

use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{ConfigBuilder, WriteLogger};

const CONFIG_NAME: &str = "pomoui";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Offer a long break after every fourth focus session.
    pub long_break: bool,

    /// Write a debug log to this file; no logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            long_break: true,
            log_file: None,
        }
    }
}

pub fn load_config() -> AppConfig {
    let Ok(path) = confy::get_configuration_file_path(CONFIG_NAME, None) else {
        return AppConfig::default();
    };

    if !path.exists() {
        return AppConfig::default();
    }

    confy::load_path(&path).unwrap_or_default()
}

/// Installs the file logger if the configuration names a log file.
///
/// Logging is best-effort, a log file that cannot be created is ignored
/// rather than stopping the timer.
pub fn init_logging(cfg: &AppConfig) {
    let Some(log_file) = &cfg.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(file) = std::fs::File::create(log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, file);
    }
}
