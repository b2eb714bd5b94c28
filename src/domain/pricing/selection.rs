//! A student's raw course choices.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseKey, CourseType, DiscountRate};

/// Choices that shape schedule and fee, exactly as the form submitted them.
///
/// Dates stay as strings here; they are parsed (and rejected) during
/// validation so the original input can be echoed back for editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChoices {
    #[serde(default)]
    pub start_date: Option<String>,
    pub paid_weeks: u32,
    #[serde(default)]
    pub skip_weeks: Vec<i64>,
    #[serde(default)]
    pub course_type: Option<CourseType>,
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub time_option: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub recording_dates: Vec<String>,
    #[serde(default)]
    pub math_excluded: bool,
}

impl CourseChoices {
    pub fn new(start_date: impl Into<String>, paid_weeks: u32) -> Self {
        Self {
            start_date: Some(start_date.into()),
            paid_weeks,
            ..Self::default()
        }
    }

    pub fn with_skip_weeks(mut self, weeks: impl IntoIterator<Item = i64>) -> Self {
        self.skip_weeks = weeks.into_iter().collect();
        self
    }

    pub fn with_course_type(mut self, course_type: CourseType) -> Self {
        self.course_type = Some(course_type);
        self
    }

    pub fn with_campus(mut self, campus: impl Into<String>) -> Self {
        self.campus = Some(campus.into());
        self
    }

    pub fn with_time_option(mut self, label: impl Into<String>) -> Self {
        self.time_option = Some(label.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_recording_dates<S: Into<String>>(mut self, dates: impl IntoIterator<Item = S>) -> Self {
        self.recording_dates = dates.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_math_excluded(mut self) -> Self {
        self.math_excluded = true;
        self
    }
}

/// Everything needed to price one line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSelection {
    pub course_key: CourseKey,
    #[serde(default)]
    pub discount: DiscountRate,
    #[serde(flatten)]
    pub choices: CourseChoices,
}

impl CourseSelection {
    pub fn new(course_key: CourseKey, choices: CourseChoices) -> Self {
        Self {
            course_key,
            discount: DiscountRate::NONE,
            choices,
        }
    }

    pub fn with_discount(mut self, discount: DiscountRate) -> Self {
        self.discount = discount;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_flat_json() {
        let json = r#"{
            "course_key": "toefl",
            "discount": 0.1,
            "start_date": "2025-03-03",
            "paid_weeks": 4,
            "skip_weeks": [2],
            "course_type": "online"
        }"#;
        let sel: CourseSelection = serde_json::from_str(json).unwrap();
        assert_eq!(sel.course_key.as_str(), "toefl");
        assert_eq!(sel.choices.paid_weeks, 4);
        assert_eq!(sel.choices.skip_weeks, vec![2]);
        assert_eq!(sel.choices.course_type, Some(CourseType::Online));
        assert!(!sel.choices.math_excluded);
    }

    #[test]
    fn discount_defaults_to_none() {
        let json = r#"{"course_key": "toefl", "paid_weeks": 1}"#;
        let sel: CourseSelection = serde_json::from_str(json).unwrap();
        assert_eq!(sel.discount, DiscountRate::NONE);
        assert!(sel.choices.start_date.is_none());
    }

    #[test]
    fn builders_fill_choices() {
        let choices = CourseChoices::new("2025-03-03", 4)
            .with_skip_weeks([3])
            .with_time_option("Evening")
            .with_recording_dates(["2025-03-04"])
            .with_math_excluded();
        assert_eq!(choices.start_date.as_deref(), Some("2025-03-03"));
        assert_eq!(choices.time_option.as_deref(), Some("Evening"));
        assert_eq!(choices.recording_dates.len(), 1);
        assert!(choices.math_excluded);
    }
}
