//! File-backed tracing setup
//!
//! The terminal is in raw mode on the alternate screen while the app runs, so
//! log records go to a file instead of stderr. `RUST_LOG` takes precedence
//! over the configured level.

use crate::config::AppConfig;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Build the filter from `RUST_LOG`, falling back to `level`
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LoggingError::Filter {
            directive: level.to_string(),
            message: e.to_string(),
        })
}

/// Install the global subscriber. Returns `false` when no log file is
/// configured and logging stays disabled.
pub fn init(config: &AppConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let filter = build_filter(&config.log_level)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}
