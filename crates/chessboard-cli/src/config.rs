//! Configuration file loading for the terminal driver.
//!
//! Settings come from `chessboard.toml` in the working directory unless a
//! path is given on the command line. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or interpreting configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The log level is not one tracing understands.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How pieces are drawn in the board diagram.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Terminal driver settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Piece glyphs for the board diagram. Defaults to Unicode.
    #[serde(default)]
    pub glyphs: GlyphStyle,
    /// Print the move list after every move. Defaults to true.
    #[serde(default = "default_show_moves")]
    pub show_moves: bool,
    /// Maximum tracing level ("error" through "trace"). Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_show_moves() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            glyphs: GlyphStyle::default(),
            show_moves: default_show_moves(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path`, or from [`Self::default_path()`]
    /// when none is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns `chessboard.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chessboard.toml")
    }

    /// Parses the configured log level.
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    /// Returns true if diagrams should use Unicode glyphs.
    pub fn unicode(&self) -> bool {
        self.glyphs == GlyphStyle::Unicode
    }
}
