//! # Configuration
//!
//! [`DeliveryConfig`] is read from TOML. Missing keys take their defaults:
//!
//! ```toml
//! search_debounce_ms = 3000
//! message_buffer = 32
//! store_buffer = 32
//! notification_buffer = 16
//! navigation_buffer = 8
//! log_filter = "info"
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeliveryConfig {
    /// Delay before a search runs, in milliseconds.
    pub search_debounce_ms: u64,
    pub message_buffer: usize,
    pub store_buffer: usize,
    pub notification_buffer: usize,
    pub navigation_buffer: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 3_000,
            message_buffer: 32,
            store_buffer: 32,
            notification_buffer: 16,
            navigation_buffer: 8,
            log_filter: "info".to_string(),
        }
    }
}

impl DeliveryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Channel capacities must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let buffers = [
            ("message_buffer", self.message_buffer),
            ("store_buffer", self.store_buffer),
            ("notification_buffer", self.notification_buffer),
            ("navigation_buffer", self.navigation_buffer),
        ];
        match buffers.iter().find(|(_, size)| *size == 0) {
            Some((name, _)) => Err(ConfigError::Invalid(format!("{name} must be at least 1"))),
            None => Ok(()),
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
