//! Total-fee calculator - schedule, fee, class days, and recording split
//! for one selection.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::{
    split_recording_fee, CourseChoices, CourseSelection, FeeQuote, FeeResolver, FeeVariant,
    QuoteError, RecordingSplit,
};
use crate::domain::calendar::parse_date_only;
use crate::domain::catalog::{CourseCatalog, CourseDefinition};
use crate::domain::foundation::{CourseKey, DiscountRate};
use crate::domain::schedule::{
    filter_recording_dates, get_available_recording_dates, total_class_days, ScheduleInput,
    ScheduleResolver, ScheduleResult,
};

/// Full breakdown behind a priced selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeDetails {
    pub quote: FeeQuote,
    pub schedule: ScheduleResult,
    pub total_class_days: u32,
    /// Selected recording dates that are actually available.
    pub recording_dates: Vec<NaiveDate>,
    pub split: RecordingSplit,
    pub discount: DiscountRate,
}

impl FeeDetails {
    pub fn recording_days(&self) -> u32 {
        self.recording_dates.len() as u32
    }

    pub fn final_fee(&self) -> u64 {
        self.split.final_fee
    }
}

/// UI-facing preview that never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeePreview {
    pub total_fee: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<FeeDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FeePreview {
    pub fn from_result(result: Result<FeeDetails, QuoteError>) -> Self {
        match result {
            Ok(details) => Self {
                total_fee: details.final_fee(),
                details: Some(details),
                error: None,
            },
            Err(err) => Self {
                total_fee: 0,
                details: None,
                error: Some(err.to_string()),
            },
        }
    }
}

/// Parses the selected start date.
pub fn parse_start_date(raw: Option<&str>) -> Result<NaiveDate, QuoteError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let raw = raw.ok_or(QuoteError::MissingStartDate)?;
    parse_date_only(raw).ok_or_else(|| QuoteError::InvalidStartDate(raw.to_string()))
}

/// Builds the resolver input for `course` from a student's choices.
pub fn schedule_input_for(
    course: &CourseDefinition,
    start_date: NaiveDate,
    choices: &CourseChoices,
) -> ScheduleInput {
    ScheduleInput {
        start_date,
        paid_weeks: choices.paid_weeks,
        skip_weeks: choices.skip_weeks.clone(),
        course_days: course.class_days.clone(),
        end_day: course.end_day,
        break_ranges: course.break_ranges.clone(),
    }
}

/// Recording dates offered for a resolved schedule, capped at its end date.
pub fn available_recording_dates(
    course: &CourseDefinition,
    input: &ScheduleInput,
    schedule: &ScheduleResult,
) -> Vec<NaiveDate> {
    get_available_recording_dates(
        input.start_date,
        schedule.schedule_weeks,
        &course.class_days,
        &schedule.normalized_skip_weeks,
        &course.break_ranges,
    )
    .into_iter()
    .filter(|day| *day <= schedule.end_date)
    .collect()
}

/// Prices one selection.
///
/// Paid weeks outside the course's range are refused before any calendar
/// work. Recording dates are counted only when the course offers recording
/// for the chosen course type; unavailable picks are dropped silently here
/// and rejected by the cart builder.
pub fn calculate_total_fee(
    catalog: &CourseCatalog,
    course_key: &CourseKey,
    discount: DiscountRate,
    choices: &CourseChoices,
) -> Result<FeeDetails, QuoteError> {
    let course = catalog
        .get(course_key)
        .ok_or_else(|| QuoteError::UnknownCourse(course_key.clone()))?;
    let start_date = parse_start_date(choices.start_date.as_deref())?;
    if !course.accepts_paid_weeks(choices.paid_weeks) {
        return Err(QuoteError::PaidWeeksOutOfRange {
            weeks: choices.paid_weeks,
            min: course.min_weeks,
            max: course.max_weeks,
        });
    }
    let fee = FeeResolver::resolve(catalog, course, &FeeVariant::from(choices))?;

    let input = schedule_input_for(course, start_date, choices);
    let schedule = ScheduleResolver::resolve(&input);
    let quote = FeeResolver::quote(&fee, start_date, choices.paid_weeks, &schedule);
    let class_days = total_class_days(&input, &schedule);

    let wants_recording = !choices.recording_dates.is_empty();
    let recording_dates = if wants_recording && course.recording.allows(choices.course_type) {
        let available = available_recording_dates(course, &input, &schedule);
        filter_recording_dates(&choices.recording_dates, &available)
    } else {
        Vec::new()
    };

    let split = split_recording_fee(
        quote.total_fee,
        class_days,
        recording_dates.len() as u32,
        discount,
    );

    debug!(
        course = %course_key,
        paid_weeks = choices.paid_weeks,
        schedule_weeks = schedule.schedule_weeks,
        class_days,
        final_fee = split.final_fee,
        "Fee calculated"
    );

    Ok(FeeDetails {
        quote,
        schedule,
        total_class_days: class_days,
        recording_dates,
        split,
        discount,
    })
}

/// Prices a selection for live display.
pub fn preview_fee(catalog: &CourseCatalog, selection: &CourseSelection) -> FeePreview {
    FeePreview::from_result(calculate_total_fee(
        catalog,
        &selection.course_key,
        selection.discount,
        &selection.choices,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::RecordingAvailability;
    use crate::domain::foundation::{CourseType, Weekday};

    fn key(s: &str) -> CourseKey {
        CourseKey::new(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog() -> CourseCatalog {
        let toefl = CourseDefinition::new(key("toefl"), "TOEFL", 50_000, Weekday::Friday)
            .with_class_days([Weekday::Monday, Weekday::Wednesday, Weekday::Friday])
            .with_recording(RecordingAvailability::ByCourseType {
                online: true,
                offline: false,
            });
        CourseCatalog::new(vec![toefl]).unwrap()
    }

    // ══════════════════════════════════════════════════════════════
    // Start date
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn start_date_missing_or_blank() {
        assert_eq!(parse_start_date(None), Err(QuoteError::MissingStartDate));
        assert_eq!(parse_start_date(Some("  ")), Err(QuoteError::MissingStartDate));
    }

    #[test]
    fn start_date_invalid() {
        assert_eq!(
            parse_start_date(Some("2025-02-30")),
            Err(QuoteError::InvalidStartDate("2025-02-30".into()))
        );
    }

    #[test]
    fn start_date_parses() {
        assert_eq!(parse_start_date(Some(" 2025-03-03 ")), Ok(date(2025, 3, 3)));
    }

    // ══════════════════════════════════════════════════════════════
    // calculate_total_fee
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn prices_plain_selection() {
        let choices = CourseChoices::new("2025-03-03", 4);
        let details =
            calculate_total_fee(&catalog(), &key("toefl"), DiscountRate::NONE, &choices).unwrap();
        assert_eq!(details.quote.total_fee, 200_000);
        assert_eq!(details.total_class_days, 12);
        assert_eq!(details.final_fee(), 200_000);
        assert_eq!(details.quote.end_date, date(2025, 3, 28));
    }

    #[test]
    fn counts_recording_only_when_allowed() {
        let choices = CourseChoices::new("2025-03-03", 4)
            .with_recording_dates(["2025-03-05", "2025-03-05", "2025-03-06", "bogus"]);

        let offline = choices.clone().with_course_type(CourseType::Offline);
        let details =
            calculate_total_fee(&catalog(), &key("toefl"), DiscountRate::NONE, &offline).unwrap();
        assert_eq!(details.recording_days(), 0);

        let online = choices.with_course_type(CourseType::Online);
        let details =
            calculate_total_fee(&catalog(), &key("toefl"), DiscountRate::NONE, &online).unwrap();
        assert_eq!(details.recording_dates, vec![date(2025, 3, 5)]);
        assert!(details.final_fee() < 200_000);
    }

    #[test]
    fn unknown_course_is_error() {
        let choices = CourseChoices::new("2025-03-03", 4);
        assert_eq!(
            calculate_total_fee(&catalog(), &key("gre"), DiscountRate::NONE, &choices),
            Err(QuoteError::UnknownCourse(key("gre")))
        );
    }

    #[test]
    fn preview_never_fails() {
        let sel = CourseSelection::new(key("toefl"), CourseChoices::default());
        let preview = preview_fee(&catalog(), &sel);
        assert_eq!(preview.total_fee, 0);
        assert!(preview.details.is_none());
        assert_eq!(preview.error.as_deref(), Some("Start date is required"));
    }

    #[test]
    fn paid_weeks_above_course_maximum_are_refused() {
        let choices = CourseChoices::new("2025-03-03", 2_000_000)
            .with_course_type(CourseType::Online)
            .with_skip_weeks([2]);
        assert_eq!(
            calculate_total_fee(&catalog(), &key("toefl"), DiscountRate::NONE, &choices),
            Err(QuoteError::PaidWeeksOutOfRange {
                weeks: 2_000_000,
                min: 1,
                max: 52
            })
        );
    }

    #[test]
    fn preview_with_maximal_paid_weeks_reports_range() {
        let sel = CourseSelection::new(
            key("toefl"),
            CourseChoices::new("2025-03-03", u32::MAX).with_skip_weeks([2]),
        );
        let preview = preview_fee(&catalog(), &sel);
        assert_eq!(preview.total_fee, 0);
        assert_eq!(
            preview.error.as_deref(),
            Some("Paid weeks must be between 1 and 52, got 4294967295")
        );
    }

    #[test]
    fn preview_applies_discount() {
        let sel = CourseSelection::new(key("toefl"), CourseChoices::new("2025-03-03", 4))
            .with_discount(DiscountRate::from_percent(10).unwrap());
        let preview = preview_fee(&catalog(), &sel);
        assert_eq!(preview.total_fee, 180_000);
        assert!(preview.error.is_none());
    }
}
