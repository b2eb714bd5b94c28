//! ReloadCatalogHandler - Command handler for swapping in a fresh catalog.

use std::sync::Arc;

use tracing::{info, warn};

use crate::ports::{CatalogError, CatalogRepository, CatalogSource};

/// Result of a successful reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadCatalogResult {
    pub courses: usize,
}

/// Loads a catalog from its source and replaces the current one.
///
/// A failed load leaves the current catalog in place.
pub struct ReloadCatalogHandler {
    source: Arc<dyn CatalogSource>,
    repository: Arc<dyn CatalogRepository>,
}

impl ReloadCatalogHandler {
    pub fn new(source: Arc<dyn CatalogSource>, repository: Arc<dyn CatalogRepository>) -> Self {
        Self { source, repository }
    }

    pub async fn handle(&self) -> Result<ReloadCatalogResult, CatalogError> {
        let catalog = match self.source.load().await {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(
                    source = %self.source.describe(),
                    error = %err,
                    "Catalog reload failed; keeping current catalog"
                );
                return Err(err);
            }
        };

        let courses = catalog.len();
        self.repository.replace(catalog).await;
        info!(source = %self.source.describe(), courses, "Catalog reloaded");

        Ok(ReloadCatalogResult { courses })
    }
}
