//! Delivery mode of a course.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Online or offline delivery, where time and recording rules may differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Online,
    Offline,
}

impl CourseType {
    /// Returns the display label used in line-item names.
    pub fn label(&self) -> &'static str {
        match self {
            CourseType::Online => "Online",
            CourseType::Offline => "Offline",
        }
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CourseType::Online).unwrap(), "\"online\"");
        let parsed: CourseType = serde_json::from_str("\"offline\"").unwrap();
        assert_eq!(parsed, CourseType::Offline);
    }

    #[test]
    fn labels_are_capitalized() {
        assert_eq!(CourseType::Online.to_string(), "Online");
        assert_eq!(CourseType::Offline.label(), "Offline");
    }
}
