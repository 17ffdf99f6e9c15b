//! CLI configuration.
//!
//! Settings live in `~/.config/eventplan/config.toml` by default. Every field
//! has a default, so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// CliConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the eventplan CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug logging.
    pub debug: bool,

    /// Output settings.
    pub output: OutputSettings,

    /// Expansion window settings.
    pub expansion: ExpansionSettings,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Print JSON instead of text.
    pub json: bool,
}

/// Bounds for `expand`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionSettings {
    /// Window length used when `--to` is not given.
    pub default_window_days: u32,

    /// Longest window `expand` accepts.
    pub max_window_days: u32,
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        Self {
            default_window_days: 30,
            max_window_days: 3660,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default path, or defaults if the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eventplan")
    }

    /// Checks that the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let expansion = &self.expansion;
        if expansion.default_window_days == 0 {
            return Err(ConfigError::Invalid(
                "expansion.default_window_days must be at least 1".to_string(),
            ));
        }
        if expansion.max_window_days == 0 {
            return Err(ConfigError::Invalid(
                "expansion.max_window_days must be at least 1".to_string(),
            ));
        }
        if expansion.default_window_days > expansion.max_window_days {
            return Err(ConfigError::Invalid(format!(
                "expansion.default_window_days ({}) exceeds expansion.max_window_days ({})",
                expansion.default_window_days, expansion.max_window_days
            )));
        }
        Ok(())
    }
}
