//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the tuition engine.

mod course_type;
mod discount;
mod errors;
mod ids;
mod weekday;

pub use course_type::CourseType;
pub use discount::DiscountRate;
pub use errors::ValidationError;
pub use ids::{CourseKey, LineItemId};
pub use weekday::Weekday;
