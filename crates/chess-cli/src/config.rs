//! Configuration file loading for the command-line host.
//!
//! Settings live in `chess.toml` in the working directory unless another
//! path is given on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How the board is populated at start-up and on `reset`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StartPosition {
    /// The full thirty-two piece army.
    #[default]
    Standard,
    /// Just the two kings on their home squares.
    KingsOnly,
}

/// Host settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for the tracing subscriber, used when `RUST_LOG`
    /// is not set. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print the board after every accepted move. Defaults to true.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    #[serde(default)]
    pub start: StartPosition,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_show_board() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            show_board: default_show_board(),
            start: StartPosition::default(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`Self::config_path()`] is tried and a missing file yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let path = Self::config_path();
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Returns the default configuration path, `chess.toml` in the current
    /// working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
