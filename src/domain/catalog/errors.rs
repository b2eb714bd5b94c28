//! Catalog consistency errors.

use thiserror::Error;

use crate::domain::foundation::CourseKey;

/// Problems found while assembling a course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogValidationError {
    #[error("Course '{0}' is defined more than once")]
    DuplicateKey(CourseKey),

    #[error("Course '{course}' links campus '{campus}' to unknown course '{target}'")]
    UnknownCampusLink {
        course: CourseKey,
        campus: String,
        target: CourseKey,
    },

    #[error("Course '{course}' has min_weeks {min} greater than max_weeks {max}")]
    InvalidWeekRange { course: CourseKey, min: u32, max: u32 },

    #[error("Course '{0}' must have a name")]
    MissingName(CourseKey),
}
