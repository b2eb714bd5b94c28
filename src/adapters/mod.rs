//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Catalog sources (YAML file) and holders (in-memory)

pub mod catalog;

pub use catalog::{InMemoryCatalogRepository, YamlCatalogSource};
