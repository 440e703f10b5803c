//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ConfigError;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictac.toml";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "TICTAC_DATA_DIR";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding saved stats, history and settings.
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,

    /// Pause before the computer answers, in milliseconds.
    #[serde(default = "default_opponent_delay_ms")]
    opponent_delay_ms: u64,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_data_dir() -> PathBuf {
    PathBuf::from(".tictac")
}

#[instrument]
fn default_opponent_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            opponent_delay_ms: default_opponent_delay_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(data_dir = %config.data_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used when present and defaults otherwise. [`DATA_DIR_ENV`] then
    /// overrides the data directory.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            debug!(dir = %dir, "Data directory overridden from environment");
            config.data_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    /// Overrides the data directory.
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    /// Pause before the computer answers.
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}
