//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `assistbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use assistbridge_domain::error::{AssistError, ValidationError};
use assistbridge_domain::exposure::{DEFAULT_SPLIT_DOMAINS, ExposureOptions};
use assistbridge_domain::id::AssistantId;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot source.
    pub snapshot: SnapshotConfig,
    /// Exposure report settings.
    pub exposure: ExposureConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Where the host snapshot is read from.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Path to the JSON snapshot file.
    pub path: String,
}

/// Which assistant the report is built for, and how it is bucketed.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    /// Assistant whose exposure rules apply.
    pub assistant: String,
    /// Domains that get their own bucket.
    pub split_domains: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `assistbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("assistbridge.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ASSISTBRIDGE_SNAPSHOT") {
            self.snapshot.path = val;
        }
        if let Ok(val) = std::env::var("ASSISTBRIDGE_ASSISTANT") {
            self.exposure.assistant = val;
        }
        if let Ok(val) = std::env::var("ASSISTBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.exposure.assistant.is_empty() {
            return Err(ConfigError::Validation(
                ValidationError::EmptyAssistant.to_string(),
            ));
        }
        self.exposure_options()?;
        Ok(())
    }

    /// The assistant the report is built for.
    #[must_use]
    pub fn assistant(&self) -> AssistantId {
        AssistantId::new(self.exposure.assistant.clone())
    }

    /// Split-out domain configuration for the exposure service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a domain collides with the
    /// catch-all key.
    pub fn exposure_options(&self) -> Result<ExposureOptions, ConfigError> {
        ExposureOptions::new(self.exposure.split_domains.iter().cloned()).map_err(|err| match err {
            AssistError::Validation(inner) => ConfigError::Validation(inner.to_string()),
            other => ConfigError::Validation(other.to_string()),
        })
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: "snapshot.json".to_string(),
        }
    }
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            assistant: "conversation".to_string(),
            split_domains: DEFAULT_SPLIT_DOMAINS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "assistbridge=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
