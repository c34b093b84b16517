//! Error types for coolmap operations.
//!
//! The scoring and rendering core never fails: out-of-range input is
//! clamped. Errors only arise at the edges, when reading configuration,
//! writing reports, or driving the terminal.
//!
//! Library code returns [`CoolmapError`]; command handlers and `main` use
//! `anyhow::Result` and attach context on top.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoolmapError {
    /// Configuration file exists but could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file is not valid TOML for the expected schema
    #[error("Failed to parse config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Configuration file {} already exists. Use --force to overwrite.", .path.display())]
    ConfigExists { path: PathBuf },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Terminal or output stream I/O
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CoolmapError {
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoolmapError>;
