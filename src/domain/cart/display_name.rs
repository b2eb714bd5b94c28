//! Line-item display names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::catalog::CourseDefinition;
use crate::domain::foundation::CourseType;

/// Family names shown instead of the catalog name for legacy course codes.
static LEGACY_FAMILY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("sat-intensive", "SAT Intensive"),
        ("sat-weekend", "SAT Intensive"),
        ("act-intensive", "ACT Intensive"),
        ("ap-calculus-bundle", "AP Calculus"),
    ])
});

/// Chosen variant labels appended to the course name.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantLabels<'a> {
    pub campus: Option<&'a str>,
    pub time_option: Option<&'a str>,
    pub level: Option<&'a str>,
    pub course_type: Option<CourseType>,
}

/// Base name for a course, honouring legacy family overrides.
pub fn base_name(course: &CourseDefinition) -> &str {
    LEGACY_FAMILY_NAMES
        .get(course.key.as_str())
        .copied()
        .unwrap_or(course.name.as_str())
}

/// Name shown in the cart, e.g. `TOEFL (Gangnam / Evening / Online)`.
pub fn display_name(course: &CourseDefinition, labels: &VariantLabels<'_>) -> String {
    let course_type = labels.course_type.map(|t| t.label());
    let suffix: Vec<&str> = [labels.campus, labels.time_option, labels.level, course_type]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let name = base_name(course);
    if suffix.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, suffix.join(" / "))
    }
}
