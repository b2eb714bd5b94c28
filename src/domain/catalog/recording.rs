//! Recorded-lecture availability.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::CourseType;

/// Whether students may swap live days for recorded lectures.
///
/// Catalog files write either a bare boolean or an online/offline record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordingAvailability {
    Uniform(bool),
    ByCourseType { online: bool, offline: bool },
}

impl RecordingAvailability {
    /// Returns true if recording is allowed for the chosen course type.
    ///
    /// A per-type rule with no course type chosen denies recording.
    pub fn allows(&self, course_type: Option<CourseType>) -> bool {
        match (self, course_type) {
            (RecordingAvailability::Uniform(allowed), _) => *allowed,
            (RecordingAvailability::ByCourseType { online, .. }, Some(CourseType::Online)) => *online,
            (RecordingAvailability::ByCourseType { offline, .. }, Some(CourseType::Offline)) => {
                *offline
            }
            (RecordingAvailability::ByCourseType { .. }, None) => false,
        }
    }
}

impl Default for RecordingAvailability {
    fn default() -> Self {
        RecordingAvailability::Uniform(false)
    }
}
