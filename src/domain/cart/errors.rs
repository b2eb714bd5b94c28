//! Cart-specific error types.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::{CourseKey, LineItemId, Weekday};

/// One user-correctable problem with a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("Please choose a start date")]
    MissingStartDate,

    #[error("Start date '{0}' is not a valid date")]
    InvalidStartDate(String),

    #[error("This course cannot start on {weekday}; allowed start days: {allowed}")]
    StartDayNotAllowed { weekday: Weekday, allowed: String },

    #[error("Paid weeks must be between {min} and {max} (got {weeks})")]
    PaidWeeksOutOfRange { weeks: u32, min: u32, max: u32 },

    #[error("Please choose online or offline")]
    MissingCourseType,

    #[error("Please choose a time slot")]
    MissingTimeOption,

    #[error("Unknown time slot '{0}'")]
    UnknownTimeOption(String),

    #[error("Please choose a campus")]
    MissingCampus,

    #[error("Unknown campus '{0}'")]
    UnknownCampus(String),

    #[error("Please choose a level")]
    MissingLevel,

    #[error("Unknown level '{0}'")]
    UnknownLevel(String),

    #[error("The first week cannot be skipped")]
    FirstWeekSkipped,

    #[error("Recorded lectures are not available for this course")]
    RecordingUnavailable,

    #[error("Recording date {0} is not an available class day")]
    RecordingDateUnavailable(String),

    #[error("At least one class day must be attended live")]
    AllDaysRecorded,

    #[error("This course is already in the cart with the same start date and options")]
    Duplicate,
}

/// Every issue found in one selection, reported together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.0.push(issue);
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    pub fn contains(&self, issue: &ValidationIssue) -> bool {
        self.0.contains(issue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(())` when no issues were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl FromIterator<ValidationIssue> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationIssue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Errors from creating or updating a cart line item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineItemError {
    #[error("Unknown course '{0}'")]
    UnknownCourse(CourseKey),

    #[error("Line item {0} is not in the cart")]
    UnknownLineItem(LineItemId),

    #[error("{0}")]
    Invalid(ValidationErrors),
}

impl From<ValidationErrors> for LineItemError {
    fn from(errors: ValidationErrors) -> Self {
        LineItemError::Invalid(errors)
    }
}
