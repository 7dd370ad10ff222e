// Configuration management for tracklist
// Loads settings from TOML, with sensible defaults when the file or a key is missing

use crate::error::{Error, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub tracklist: TracklistConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub animation_delay_ms: u64,
    pub progress_width: usize,
    pub secret_intro_ms: u64,
    pub clear_screen: bool,
    pub color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracklistConfig {
    /// Text file with one "Artist - Title" per line; the built-in set when unset
    pub path: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animation_delay_ms: 50,
            progress_width: crate::render::DEFAULT_PROGRESS_WIDTH,
            secret_intro_ms: 2000,
            clear_screen: true,
            color: true,
        }
    }
}

impl Config {
    /// Load from the default location, or return defaults if nothing is there yet
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("tracklist").join("config.toml"))
    }
}
