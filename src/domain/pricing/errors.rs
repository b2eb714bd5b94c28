//! Pricing error types.

use thiserror::Error;

use crate::domain::foundation::CourseKey;

/// Reasons a fee quote cannot be produced.
///
/// Live previews surface these as text; none of them are faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Unknown course '{0}'")]
    UnknownCourse(CourseKey),

    #[error("Start date is required")]
    MissingStartDate,

    #[error("Start date '{0}' is not a valid date")]
    InvalidStartDate(String),

    #[error("Paid weeks must be between {min} and {max}, got {weeks}")]
    PaidWeeksOutOfRange { weeks: u32, min: u32, max: u32 },

    #[error("Campus selection is required")]
    MissingCampus,

    #[error("Unknown campus '{0}'")]
    UnknownCampus(String),

    #[error("Course type (online/offline) selection is required")]
    MissingCourseType,

    #[error("Time slot selection is required")]
    MissingTimeOption,

    #[error("Unknown time slot '{0}'")]
    UnknownTimeOption(String),
}
