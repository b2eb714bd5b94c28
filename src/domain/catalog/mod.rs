//! Catalog module - course definitions read by the engine.
//!
//! # Module Structure
//!
//! - `course` - `CourseDefinition` catalog entry
//! - `catalog` - `CourseCatalog` immutable snapshot
//! - `time_spec` - `TimeSpec` display-time union
//! - `recording` - `RecordingAvailability` rule
//! - `errors` - Catalog consistency errors

#[allow(clippy::module_inception)]
mod catalog;
mod course;
mod errors;
mod recording;
mod time_spec;

pub use catalog::{CatalogDocument, CourseCatalog};
pub use course::CourseDefinition;
pub use errors::CatalogValidationError;
pub use recording::RecordingAvailability;
pub use time_spec::{TimeOption, TimeSpec};
