//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Filter from `RUST_LOG`, falling back to the configured level
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Install the global tracing subscriber
    ///
    /// Does nothing if a subscriber is already installed.
    pub fn init(&self) {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr);
        let _ = if self.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            return Err(ValidationError::InvalidLogLevel(self.level.clone()));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
