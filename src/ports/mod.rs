//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `CatalogSource` - Loads a course catalog from its backing store
//! - `CatalogRepository` - Holds the current catalog snapshot

mod catalog_repository;

pub use catalog_repository::{CatalogError, CatalogRepository, CatalogSource};
