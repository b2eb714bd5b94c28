//! Pricing module - turns a course selection into a tuition fee.
//!
//! # Module Structure
//!
//! - `selection` - `CourseSelection` raw student choices
//! - `fee_resolver` - Weekly fee and display time per variant
//! - `recording_split` - Live/recorded day fee split
//! - `calculator` - `calculate_total_fee` and `FeePreview`
//! - `errors` - `QuoteError`

mod calculator;
mod errors;
mod fee_resolver;
mod recording_split;
mod selection;

pub use calculator::{
    available_recording_dates, calculate_total_fee, parse_start_date, preview_fee,
    schedule_input_for, FeeDetails, FeePreview,
};
pub use errors::QuoteError;
pub use fee_resolver::{
    duration_label, FeeQuote, FeeResolver, FeeVariant, ResolvedFee, LEGACY_MATH_DEDUCTION,
    LEGACY_MATH_EXCLUSION_CODES,
};
pub use recording_split::{split_recording_fee, RecordingSplit, RECORDING_RATE};
pub use selection::{CourseChoices, CourseSelection};
