//! Catalog ports - where course catalogs come from and who holds the
//! current one.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::catalog::{CatalogValidationError, CourseCatalog, CourseDefinition};
use crate::domain::foundation::CourseKey;

/// Errors from loading or serving a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Catalog source does not exist.
    #[error("Catalog not found: {0}")]
    NotFound(String),

    /// Catalog could not be read.
    #[error("IO error: {0}")]
    Io(String),

    /// Catalog could not be parsed.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// Catalog parsed but is internally inconsistent.
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogValidationError),
}

/// Produces a fresh catalog snapshot from its backing store.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog.
    async fn load(&self) -> Result<CourseCatalog, CatalogError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Holds the catalog every engine call reads from.
///
/// Readers receive a shared snapshot; `replace` swaps the snapshot
/// without disturbing readers that still hold the old one.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Current catalog snapshot.
    async fn current(&self) -> Arc<CourseCatalog>;

    /// Swap in a new catalog.
    async fn replace(&self, catalog: CourseCatalog);

    /// Look up a single course in the current snapshot.
    async fn get_course(&self, key: &CourseKey) -> Option<CourseDefinition> {
        self.current().await.get(key).cloned()
    }
}
