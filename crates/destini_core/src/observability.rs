//! Tracing subscriber setup for binaries.

use destini_error::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; `default_filter` is used when it is unset.
/// Libraries in this workspace never call this; binaries do.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the filter directive is malformed or a
/// global subscriber is already installed.
pub fn init_tracing(default_filter: &str, format: LogFormat) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| {
            ConfigError::new(format!("Invalid log filter '{}': {}", default_filter, e))
        })?,
    };
    debug!(%filter, %format, "Resolved log filter");

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    info!(%format, "Tracing initialized");
    Ok(())
}
