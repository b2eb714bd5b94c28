//! Domain layer containing the tuition engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `calendar` - Day-granularity date math, break ranges, skip weeks
//! - `schedule` - Fixed-point schedule resolution and class-day counting
//! - `catalog` - Immutable course catalog
//! - `pricing` - Fee resolution, recording split, total-fee calculation
//! - `cart` - Line-item validation and construction

pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod schedule;
