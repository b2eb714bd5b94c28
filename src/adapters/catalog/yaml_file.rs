//! YAML File Catalog Source Adapter
//!
//! Reads a course catalog from a single YAML document:
//!
//! ```yaml
//! courses:
//!   - key: toefl
//!     name: TOEFL
//!     weekly_fee: 200000
//!     class_days: [mon, wed, fri]
//!     end_day: friday
//! ```

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::catalog::{CatalogDocument, CourseCatalog};
use crate::ports::{CatalogError, CatalogSource};

/// File-based catalog source
#[derive(Debug, Clone)]
pub struct YamlCatalogSource {
    path: PathBuf,
}

impl YamlCatalogSource {
    /// Create a source reading from `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a catalog from YAML text
    pub fn parse(yaml: &str) -> Result<CourseCatalog, CatalogError> {
        let document: CatalogDocument =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(CourseCatalog::try_from(document)?)
    }
}

#[async_trait]
impl CatalogSource for YamlCatalogSource {
    async fn load(&self) -> Result<CourseCatalog, CatalogError> {
        if !fs::try_exists(&self.path)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?
        {
            return Err(CatalogError::NotFound(self.describe()));
        }

        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(e.to_string()))?;

        let catalog = Self::parse(&yaml)?;

        info!(
            path = %self.path.display(),
            courses = catalog.len(),
            "Course catalog loaded"
        );

        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
