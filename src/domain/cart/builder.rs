//! Line-item builder - validates a selection and prices it into a cart item.
//!
//! Validation collects every user-correctable issue before reporting, so
//! a form can highlight all of them at once. Pricing runs only once the
//! selection is clean.

use chrono::NaiveDate;
use tracing::debug;

use super::{
    display_name, CartLineItem, LineItemError, ValidationErrors, ValidationIssue, VariantLabels,
};
use crate::domain::calendar::{normalize_skip_weeks, parse_date_only};
use crate::domain::catalog::{CourseCatalog, CourseDefinition, TimeSpec};
use crate::domain::foundation::{LineItemId, Weekday};
use crate::domain::pricing::{
    available_recording_dates, calculate_total_fee, parse_start_date, schedule_input_for,
    CourseChoices, CourseSelection, QuoteError,
};
use crate::domain::schedule::{total_class_days, ScheduleResolver};

impl From<QuoteError> for LineItemError {
    fn from(err: QuoteError) -> Self {
        let issue = match err {
            QuoteError::UnknownCourse(key) => return LineItemError::UnknownCourse(key),
            QuoteError::MissingStartDate => ValidationIssue::MissingStartDate,
            QuoteError::InvalidStartDate(raw) => ValidationIssue::InvalidStartDate(raw),
            QuoteError::PaidWeeksOutOfRange { weeks, min, max } => {
                ValidationIssue::PaidWeeksOutOfRange { weeks, min, max }
            }
            QuoteError::MissingCampus => ValidationIssue::MissingCampus,
            QuoteError::UnknownCampus(campus) => ValidationIssue::UnknownCampus(campus),
            QuoteError::MissingCourseType => ValidationIssue::MissingCourseType,
            QuoteError::MissingTimeOption => ValidationIssue::MissingTimeOption,
            QuoteError::UnknownTimeOption(label) => ValidationIssue::UnknownTimeOption(label),
        };
        LineItemError::Invalid(std::iter::once(issue).collect())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Builds priced cart items against one catalog snapshot.
pub struct LineItemBuilder<'c> {
    catalog: &'c CourseCatalog,
}

impl<'c> LineItemBuilder<'c> {
    pub fn new(catalog: &'c CourseCatalog) -> Self {
        Self { catalog }
    }

    /// Validates and prices a new selection.
    ///
    /// # Errors
    ///
    /// - `UnknownCourse` if the course key is not in the catalog
    /// - `Invalid` with every validation issue found
    pub fn create_cart_item(
        &self,
        selection: &CourseSelection,
        current_cart: &[CartLineItem],
    ) -> Result<CartLineItem, LineItemError> {
        self.build(LineItemId::new(), selection, current_cart)
    }

    /// Re-prices an existing item, keeping its id.
    ///
    /// The item itself is ignored by the duplicate check.
    pub fn update_cart_item(
        &self,
        item_id: LineItemId,
        selection: &CourseSelection,
        current_cart: &[CartLineItem],
    ) -> Result<CartLineItem, LineItemError> {
        if !current_cart.iter().any(|item| item.id == item_id) {
            return Err(LineItemError::UnknownLineItem(item_id));
        }
        self.build(item_id, selection, current_cart)
    }

    fn build(
        &self,
        id: LineItemId,
        selection: &CourseSelection,
        current_cart: &[CartLineItem],
    ) -> Result<CartLineItem, LineItemError> {
        let course = self
            .catalog
            .get(&selection.course_key)
            .ok_or_else(|| LineItemError::UnknownCourse(selection.course_key.clone()))?;

        if let Err(errors) = self.validate(id, course, selection, current_cart).into_result() {
            debug!(
                course = %selection.course_key,
                issues = errors.len(),
                "Line item rejected"
            );
            return Err(LineItemError::Invalid(errors));
        }

        let choices = &selection.choices;
        let details = calculate_total_fee(
            self.catalog,
            &selection.course_key,
            selection.discount,
            choices,
        )?;

        let labels = VariantLabels {
            campus: non_blank(choices.campus.as_deref()),
            time_option: non_blank(choices.time_option.as_deref()),
            level: non_blank(choices.level.as_deref()),
            course_type: choices.course_type,
        };

        let item = CartLineItem {
            id,
            course_key: selection.course_key.clone(),
            display_name: display_name(course, &labels),
            final_fee: details.split.final_fee,
            normal_fee: details.split.normal_fee,
            recording_fee: details.split.recording_fee,
            base_fee: details.quote.total_fee,
            total_class_days: details.total_class_days,
            recording_days: details.recording_days(),
            schedule_weeks: details.quote.schedule_weeks,
            start_date: details.quote.start_date,
            end_date: details.quote.end_date,
            time_display: details.quote.time_display.clone(),
            duration_label: details.quote.duration_label.clone(),
            selection: selection.clone(),
        };

        debug!(
            item_id = %item.id,
            course = %item.course_key,
            final_fee = item.final_fee,
            schedule_weeks = item.schedule_weeks,
            "Cart line item priced"
        );

        Ok(item)
    }

    fn validate(
        &self,
        id: LineItemId,
        course: &CourseDefinition,
        selection: &CourseSelection,
        current_cart: &[CartLineItem],
    ) -> ValidationErrors {
        let choices = &selection.choices;
        let mut errors = ValidationErrors::new();

        let start_date = match parse_start_date(choices.start_date.as_deref()) {
            Ok(date) => {
                let weekday = Weekday::of(date);
                if !course.allows_start_on(weekday) {
                    errors.push(ValidationIssue::StartDayNotAllowed {
                        weekday,
                        allowed: allowed_days(course),
                    });
                }
                Some(date)
            }
            Err(QuoteError::InvalidStartDate(raw)) => {
                errors.push(ValidationIssue::InvalidStartDate(raw));
                None
            }
            Err(_) => {
                errors.push(ValidationIssue::MissingStartDate);
                None
            }
        };

        let weeks_in_range = course.accepts_paid_weeks(choices.paid_weeks);
        if !weeks_in_range {
            errors.push(ValidationIssue::PaidWeeksOutOfRange {
                weeks: choices.paid_weeks,
                min: course.min_weeks,
                max: course.max_weeks,
            });
        }

        self.validate_variants(course, choices, &mut errors);

        if choices.skip_weeks.contains(&1) {
            errors.push(ValidationIssue::FirstWeekSkipped);
        }

        if let Some(start_date) = start_date {
            if weeks_in_range {
                validate_recording(course, start_date, selection, &mut errors);
            }
            if is_duplicate(id, start_date, selection, current_cart) {
                errors.push(ValidationIssue::Duplicate);
            }
        }

        errors
    }

    fn validate_variants(
        &self,
        course: &CourseDefinition,
        choices: &CourseChoices,
        errors: &mut ValidationErrors,
    ) {
        let mut source = course;
        if course.is_dynamic_campus() {
            match non_blank(choices.campus.as_deref()) {
                None => errors.push(ValidationIssue::MissingCampus),
                Some(campus) => match self.catalog.campus_course(course, campus) {
                    Some(linked) => source = linked,
                    None => errors.push(ValidationIssue::UnknownCampus(campus.to_string())),
                },
            }
        }

        let time = course.time_for(source);
        if time.is_some_and(TimeSpec::requires_course_type) && choices.course_type.is_none() {
            errors.push(ValidationIssue::MissingCourseType);
        }
        if let Some(spec) = time.filter(|t| t.requires_option()) {
            match non_blank(choices.time_option.as_deref()) {
                None => errors.push(ValidationIssue::MissingTimeOption),
                Some(label) if spec.option(label).is_none() => {
                    errors.push(ValidationIssue::UnknownTimeOption(label.to_string()))
                }
                Some(_) => {}
            }
        }

        if course.is_level_family() {
            match non_blank(choices.level.as_deref()) {
                None => errors.push(ValidationIssue::MissingLevel),
                Some(level) if !course.levels.iter().any(|l| l == level) => {
                    errors.push(ValidationIssue::UnknownLevel(level.to_string()))
                }
                Some(_) => {}
            }
        }
    }
}

fn allowed_days(course: &CourseDefinition) -> String {
    course
        .allowed_start_days
        .iter()
        .map(Weekday::short_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_recording(
    course: &CourseDefinition,
    start_date: NaiveDate,
    selection: &CourseSelection,
    errors: &mut ValidationErrors,
) {
    let choices = &selection.choices;
    if choices.recording_dates.is_empty() {
        return;
    }
    if !course.recording.allows(choices.course_type) {
        errors.push(ValidationIssue::RecordingUnavailable);
        return;
    }

    let input = schedule_input_for(course, start_date, choices);
    let schedule = ScheduleResolver::resolve(&input);
    let available = available_recording_dates(course, &input, &schedule);

    let mut chosen: Vec<NaiveDate> = Vec::new();
    for raw in &choices.recording_dates {
        match parse_date_only(raw.as_str()).filter(|d| available.contains(d)) {
            Some(day) => {
                if !chosen.contains(&day) {
                    chosen.push(day);
                }
            }
            None => errors.push(ValidationIssue::RecordingDateUnavailable(raw.clone())),
        }
    }

    let class_days = total_class_days(&input, &schedule);
    if class_days > 0 && chosen.len() as u32 >= class_days {
        errors.push(ValidationIssue::AllDaysRecorded);
    }
}

fn is_duplicate(
    id: LineItemId,
    start_date: NaiveDate,
    selection: &CourseSelection,
    current_cart: &[CartLineItem],
) -> bool {
    let choices = &selection.choices;
    let skip_weeks = normalize_skip_weeks(&choices.skip_weeks, choices.paid_weeks);

    current_cart.iter().filter(|item| item.id != id).any(|item| {
        let other = &item.selection.choices;
        item.course_key == selection.course_key
            && item.start_date == start_date
            && other.course_type == choices.course_type
            && normalize_skip_weeks(&other.skip_weeks, other.paid_weeks) == skip_weeks
    })
}
