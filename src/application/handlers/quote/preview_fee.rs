//! PreviewFeeHandler - Query handler for live fee previews.

use std::sync::Arc;

use crate::domain::pricing::{preview_fee, CourseSelection, FeePreview};
use crate::ports::CatalogRepository;

/// Query for a live fee preview.
#[derive(Debug, Clone)]
pub struct PreviewFeeQuery {
    pub selection: CourseSelection,
}

/// Handler for fee previews against the current catalog.
pub struct PreviewFeeHandler {
    catalog: Arc<dyn CatalogRepository>,
}

impl PreviewFeeHandler {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Never fails; problems come back in `FeePreview::error`.
    pub async fn handle(&self, query: PreviewFeeQuery) -> FeePreview {
        let catalog = self.catalog.current().await;
        preview_fee(&catalog, &query.selection)
    }
}
