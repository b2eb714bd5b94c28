//! Runtime configuration for the quoting tools.
//!
//! Settings come from `ACADEMY`-prefixed environment variables, with an
//! optional `.env` file read first. Nested keys are joined with `__`.
//!
//! ```no_run
//! use academy_tuition::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("catalog: {}", config.catalog.path.display());
//! # Ok::<(), academy_tuition::config::ConfigError>(())
//! ```

mod catalog;
mod error;
mod logging;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads cleanly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Course catalog location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and the process environment.
    ///
    /// `ACADEMY__CATALOG__PATH=/srv/catalog.yaml` sets `catalog.path`;
    /// `ACADEMY__LOGGING__JSON=true` sets `logging.json`. Missing keys
    /// fall back to section defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ACADEMY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section, stopping at the first invalid value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
