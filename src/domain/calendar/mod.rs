//! Calendar module - day-granularity date math.
//!
//! # Module Structure
//!
//! - `date_only` - Parse, format, and shift calendar days
//! - `break_range` - Course-wide holiday ranges and their normalization
//! - `skip_weeks` - Student skip-week normalization

mod break_range;
mod date_only;
mod skip_weeks;

pub use break_range::{normalize_break_ranges, BreakRange, RawBreakRange};
pub use date_only::{
    add_days, days_between, format_date_only, parse_date_only, weekday_index, ToDateOnly,
};
pub use skip_weeks::{normalize_skip_weeks, FIRST_SKIPPABLE_WEEK};
