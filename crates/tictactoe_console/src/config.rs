//! Console configuration loaded from TOML.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::EmptyStyle;

/// Console settings. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ConsoleConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[setters(into)]
    log_filter: String,

    /// Log destination; stderr when absent.
    log_file: Option<PathBuf>,

    /// How empty cells are drawn.
    empty_cell: EmptyStyle,

    /// Print the leaderboard whenever a game ends.
    show_leaderboard: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_file: None,
            empty_cell: EmptyStyle::Numbers,
            show_leaderboard: true,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    ///
    /// Logging is not initialized yet when this runs, so nothing is traced here.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_cli_overrides(self, cli: &Cli) -> Self {
        let config = match &cli.log_filter {
            Some(filter) => self.with_log_filter(filter.as_str()),
            None => self,
        };
        match &cli.log_file {
            Some(path) => config.with_log_file(Some(path.clone())),
            None => config,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
