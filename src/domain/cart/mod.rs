//! Cart module - priced line items built from course selections.
//!
//! # Module Structure
//!
//! - `builder` - `LineItemBuilder` validation and pricing
//! - `line_item` - `CartLineItem` and cart totals
//! - `display_name` - Cart display names with legacy family overrides
//! - `errors` - `ValidationIssue`, `ValidationErrors`, `LineItemError`

mod builder;
mod display_name;
mod errors;
mod line_item;

pub use builder::LineItemBuilder;
pub use display_name::{base_name, display_name, VariantLabels};
pub use errors::{LineItemError, ValidationErrors, ValidationIssue};
pub use line_item::{cart_total, CartLineItem};
