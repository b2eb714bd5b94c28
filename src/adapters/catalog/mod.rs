//! Catalog adapters.

mod in_memory;
mod yaml_file;

pub use in_memory::InMemoryCatalogRepository;
pub use yaml_file::YamlCatalogSource;
