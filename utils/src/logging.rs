//! Structured logging initialisation.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`] for coloured, human-readable lines.
//! - [`LogFormat::Json`] for newline-delimited JSON.
//!
//! The filter level can be overridden at runtime via the `RUST_LOG`
//! environment variable. When `RUST_LOG` is not set, the caller-supplied
//! `level` string is used (e.g. `"info"`, `"debug,cinder_chainparams=trace"`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log format: {0}")]
    UnknownFormat(String),

    #[error("a global subscriber is already installed: {0}")]
    AlreadyInitialised(String),
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber has already been set in this process.
pub fn init_logging(format: LogFormat, level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Human => registry
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init(),
    };
    result.map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))
}

/// Route logs to the test harness's captured output. Safe to call from every test.
pub fn init_test_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
