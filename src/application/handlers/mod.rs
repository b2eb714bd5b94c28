//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quote;

pub use quote::{
    AddCartItemCommand, AddCartItemHandler, AddCartItemResult, PreviewFeeHandler,
    PreviewFeeQuery, ReloadCatalogHandler, ReloadCatalogResult,
};
