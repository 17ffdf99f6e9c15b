//! CLI error types.

use std::io;
use std::path::PathBuf;

use eventplan_core::{RecurrenceError, ScheduleError, TracingError};
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised while loading or checking the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A setting holds a value outside its allowed range.
    #[error("{0}")]
    Invalid(String),
}

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The rule text was rejected; the code tells the user what to fix.
    #[error("invalid rule [{code}]: {0}", code = .0.code())]
    Rule(#[from] RecurrenceError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Expansion window longer than `max_window_days`.
    #[error("window of {days} days exceeds the limit of {max} days")]
    WindowTooLarge { days: u64, max: u32 },

    #[error("invalid window: {0}")]
    Window(String),

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize config: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("logging setup failed: {0}")]
    Tracing(#[from] TracingError),
}

impl CliError {
    /// Creates a window error.
    pub fn window(message: impl Into<String>) -> Self {
        Self::Window(message.into())
    }
}
