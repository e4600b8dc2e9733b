//! Configuration loaded from `destini.toml` and the environment.

use derive_getters::Getters;
use destini_core::LogFormat;
use destini_error::ConfigError;
use destini_narrative::validator::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "destini.toml";

/// Top-level configuration.
///
/// # Examples
///
/// ```
/// use destini::DestiniConfig;
///
/// let config = DestiniConfig::from_toml_str(r#"
///     [validation]
///     allow_unreachable = false
/// "#).unwrap();
///
/// assert!(!config.validation().allow_unreachable);
/// assert_eq!(config.log().filter(), "info");
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct DestiniConfig {
    /// Story validation and graph policy
    validation: ValidationConfig,
    /// Logging setup for the binary
    log: LogConfig,
}

/// Logging section of the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[serde(default)]
#[builder(default, setter(into))]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    filter: String,
    /// Output format
    format: LogFormat,
}

impl LogConfig {
    /// Returns a builder for constructing a LogConfig.
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl DestiniConfig {
    /// Returns a builder for constructing a DestiniConfig.
    pub fn builder() -> DestiniConfigBuilder {
        DestiniConfigBuilder::default()
    }

    /// Load configuration from a TOML file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text. Missing sections use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolve configuration for the binary.
    ///
    /// Uses `path` when given, otherwise [`DEFAULT_CONFIG_FILE`] if it exists,
    /// otherwise defaults. Environment overrides are applied last:
    /// - `DESTINI_STRICT` (`1`, `true`, `yes`) rejects unreachable nodes
    /// - `DESTINI_LOG` replaces the log filter
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    debug!("No config file found, using defaults");
                    Self::default()
                }
            }
        };

        let config = config.with_overrides(
            std::env::var("DESTINI_STRICT").ok().as_deref(),
            std::env::var("DESTINI_LOG").ok(),
        );
        info!(
            allow_unreachable = config.validation.allow_unreachable,
            log_filter = %config.log.filter,
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Apply override values as read from the environment.
    pub fn with_overrides(mut self, strict: Option<&str>, log_filter: Option<String>) -> Self {
        if let Some(strict) = strict
            && matches!(strict.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
        {
            self.validation.allow_unreachable = false;
        }
        if let Some(filter) = log_filter {
            self.log.filter = filter;
        }
        self
    }
}
