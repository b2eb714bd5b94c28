//! Fee resolver - weekly fee, display time, and the paid span of a course.
//!
//! A course variant changes the price in exactly two ways: the math
//! exclusion discount and the dynamic-campus link (whose linked course
//! carries its own fee). Time slots and online/offline only change the
//! display time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CourseChoices, QuoteError};
use crate::domain::catalog::{CourseCatalog, CourseDefinition, TimeSpec};
use crate::domain::foundation::CourseType;
use crate::domain::schedule::ScheduleResult;

/// Weekly deduction for legacy courses without an explicit math-excluded fee.
pub const LEGACY_MATH_DEDUCTION: u64 = 120_000;

/// Course codes that predate `math_excluded_weekly_fee`. Frozen.
pub const LEGACY_MATH_EXCLUSION_CODES: &[&str] = &[
    "sat-intensive",
    "sat-weekend",
    "act-intensive",
    "ap-calculus-bundle",
];

/// The parts of a selection that affect fee or display time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeVariant<'a> {
    pub course_type: Option<CourseType>,
    pub campus: Option<&'a str>,
    pub time_option: Option<&'a str>,
    pub math_excluded: bool,
}

impl<'a> From<&'a CourseChoices> for FeeVariant<'a> {
    fn from(choices: &'a CourseChoices) -> Self {
        Self {
            course_type: choices.course_type,
            campus: choices.campus.as_deref(),
            time_option: choices.time_option.as_deref(),
            math_excluded: choices.math_excluded,
        }
    }
}

/// Fee and time for a variant, before any schedule is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFee<'c> {
    /// Course whose fee and time were used; the campus course when linked.
    pub source: &'c CourseDefinition,
    pub weekly_fee: u64,
    pub time_display: Option<String>,
}

/// Undiscounted price and calendar span for a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub weekly_fee: u64,
    pub time_display: Option<String>,
    pub paid_weeks: u32,
    pub schedule_weeks: u32,
    /// `weekly_fee * paid_weeks`.
    pub total_fee: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_label: String,
}

/// Stateless fee resolution over a catalog.
pub struct FeeResolver;

impl FeeResolver {
    /// Returns true if `course` offers a math-excluded price.
    pub fn supports_math_exclusion(course: &CourseDefinition) -> bool {
        course.math_excluded_weekly_fee.is_some()
            || LEGACY_MATH_EXCLUSION_CODES.contains(&course.key.as_str())
    }

    /// Weekly fee of `course`, honouring math exclusion where supported.
    ///
    /// Exclusion on a course that does not support it is ignored.
    pub fn weekly_fee(course: &CourseDefinition, math_excluded: bool) -> u64 {
        if !math_excluded {
            return course.weekly_fee;
        }
        match course.math_excluded_weekly_fee {
            Some(fee) => fee,
            None if LEGACY_MATH_EXCLUSION_CODES.contains(&course.key.as_str()) => {
                course.weekly_fee.saturating_sub(LEGACY_MATH_DEDUCTION)
            }
            None => course.weekly_fee,
        }
    }

    /// Resolves weekly fee and display time for `course` under `variant`.
    pub fn resolve<'c>(
        catalog: &'c CourseCatalog,
        course: &'c CourseDefinition,
        variant: &FeeVariant<'_>,
    ) -> Result<ResolvedFee<'c>, QuoteError> {
        let source = if course.is_dynamic_campus() {
            let campus = variant.campus.ok_or(QuoteError::MissingCampus)?;
            catalog
                .campus_course(course, campus)
                .ok_or_else(|| QuoteError::UnknownCampus(campus.to_string()))?
        } else {
            course
        };

        let spec = course.time_for(source);
        let time_display = match spec {
            Some(spec) => Some(Self::time_display(spec, variant)?.to_string()),
            None => None,
        };

        Ok(ResolvedFee {
            source,
            weekly_fee: Self::weekly_fee(source, variant.math_excluded),
            time_display,
        })
    }

    fn time_display<'s>(spec: &'s TimeSpec, variant: &FeeVariant<'_>) -> Result<&'s str, QuoteError> {
        if let Some(time) = spec.resolve(variant.course_type, variant.time_option) {
            return Ok(time);
        }
        match spec {
            TimeSpec::OnOff { .. } => Err(QuoteError::MissingCourseType),
            _ => match variant.time_option {
                Some(label) => Err(QuoteError::UnknownTimeOption(label.to_string())),
                None => Err(QuoteError::MissingTimeOption),
            },
        }
    }

    /// Prices a resolved fee over a resolved schedule.
    ///
    /// The end date comes from the schedule weeks, not the paid weeks.
    pub fn quote(
        fee: &ResolvedFee<'_>,
        start_date: NaiveDate,
        paid_weeks: u32,
        schedule: &ScheduleResult,
    ) -> FeeQuote {
        FeeQuote {
            weekly_fee: fee.weekly_fee,
            time_display: fee.time_display.clone(),
            paid_weeks,
            schedule_weeks: schedule.schedule_weeks,
            total_fee: fee.weekly_fee.saturating_mul(u64::from(paid_weeks)),
            start_date,
            end_date: schedule.end_date,
            duration_label: duration_label(paid_weeks, schedule.schedule_weeks),
        }
    }
}

fn weeks(n: u32) -> String {
    if n == 1 {
        "1 week".to_string()
    } else {
        format!("{} weeks", n)
    }
}

/// "4 weeks", or "4 weeks (6 weeks incl. breaks)" when the span is longer.
pub fn duration_label(paid_weeks: u32, schedule_weeks: u32) -> String {
    if schedule_weeks == paid_weeks {
        weeks(paid_weeks)
    } else {
        format!("{} ({} incl. breaks)", weeks(paid_weeks), weeks(schedule_weeks))
    }
}
