//! Application configuration
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional JSON file, and command-line overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Path of the first page shown
    pub start_route: String,
    /// Dark palette for the whole UI and every code runner
    pub dark_mode: bool,
    /// Simulated run delay in milliseconds
    pub run_delay_ms: u64,
    /// Log destination; logging is off when unset
    pub log_file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            start_route: "/".to_string(),
            dark_mode: false,
            run_delay_ms: 1000,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults, or the file at `path` when one is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }

    /// Apply command-line overrides on top of this configuration
    pub fn merge(mut self, overrides: Overrides) -> Self {
        if let Some(route) = overrides.start_route {
            self.start_route = route;
        }
        if let Some(dark) = overrides.dark_mode {
            self.dark_mode = dark;
        }
        if let Some(ms) = overrides.run_delay_ms {
            self.run_delay_ms = ms;
        }
        if let Some(file) = overrides.log_file {
            self.log_file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }
}

/// Values given on the command line; `None` leaves the file value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub start_route: Option<String>,
    /// `Some(false)` forces the light palette
    pub dark_mode: Option<bool>,
    pub run_delay_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}
