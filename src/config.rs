//! Runtime configuration file support.
//!
//! This module provides utilities for reading the room-search configuration
//! from TOML files. Everything has a sensible default, so deployments
//! without a config file work out of the box.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Room search configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomsConfig {
    #[serde(default)]
    pub opening_hours: OpeningHours,
    #[serde(default)]
    pub distances: DistanceSettings,
}

/// Opening-hours policy used by the time preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// Hour at which the university opens.
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    /// Minute within the opening hour the preset jumps to.
    #[serde(default = "default_preset_minute")]
    pub preset_minute: u32,
    /// Last hour of the day a search preset still starts on the same day.
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

/// Distance table settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistanceSettings {
    /// Optional path to an external distance table JSON file. When unset,
    /// the table embedded in the crate is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_open_hour() -> u32 {
    8
}

fn default_preset_minute() -> u32 {
    15
}

fn default_close_hour() -> u32 {
    20
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            preset_minute: default_preset_minute(),
            close_hour: default_close_hour(),
        }
    }
}

impl RoomsConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(RoomsConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `rooms.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Returns the default configuration when no file is found.
    pub fn from_default_locations() -> Result<Self, ConfigError> {
        let candidates = [
            PathBuf::from("rooms.toml"),
            PathBuf::from("config/rooms.toml"),
            PathBuf::from("../rooms.toml"),
        ];

        for candidate in &candidates {
            if candidate.is_file() {
                return Self::from_file(candidate);
            }
        }

        Ok(Self::default())
    }
}
