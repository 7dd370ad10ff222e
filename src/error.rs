// Error types for the tracklist library
// The binary wraps these in anyhow; the library keeps them typed so callers can match

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Tracklist file missing or unreadable
    #[error("failed to read tracklist {}", .path.display())]
    TracklistRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file exists but could not be read
    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for our schema
    #[error("invalid config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Writing to / reading from the terminal failed
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
