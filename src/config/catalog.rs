//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where the course catalog is read from
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the catalog YAML file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("catalog.path"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("catalog.yaml")
}
