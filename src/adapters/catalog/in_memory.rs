//! In-Memory Catalog Repository Adapter
//!
//! Holds the current catalog behind a lock. Readers clone the inner `Arc`
//! and keep computing against their snapshot while a reload swaps in
//! the next one.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::catalog::CourseCatalog;
use crate::ports::CatalogRepository;

/// In-memory holder of the current catalog
#[derive(Debug, Clone)]
pub struct InMemoryCatalogRepository {
    catalog: Arc<RwLock<Arc<CourseCatalog>>>,
}

impl InMemoryCatalogRepository {
    /// Create a repository serving `catalog`
    pub fn new(catalog: CourseCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Number of courses in the current snapshot
    pub async fn course_count(&self) -> usize {
        self.catalog.read().await.len()
    }
}

impl Default for InMemoryCatalogRepository {
    fn default() -> Self {
        Self::new(CourseCatalog::default())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn current(&self) -> Arc<CourseCatalog> {
        Arc::clone(&*self.catalog.read().await)
    }

    async fn replace(&self, catalog: CourseCatalog) {
        let courses = catalog.len();
        *self.catalog.write().await = Arc::new(catalog);
        info!(courses, "Course catalog replaced");
    }
}
