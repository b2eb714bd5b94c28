//! Schedule Resolver - schedule weeks, end date, and break-affected weeks.
//!
//! The number of calendar weeks a student spans depends on which weeks
//! break ranges touch, and which weeks they touch depends on how far the
//! schedule extends. The resolver iterates the two to a fixed point.
//!
//! # Algorithm
//!
//! 1. Normalize skip weeks; seed `schedule_weeks = paid + |skip|`.
//! 2. Find the end date for `schedule_weeks` and the weeks in
//!    `[start, end]` whose class days fall in a break range.
//! 3. Count break weeks the student has not already skipped. If the count
//!    matches the previous round, stop.
//! 4. Otherwise `schedule_weeks = paid + |skip| + count`, go to 2.
//!
//! The loop is capped at [`MAX_SCHEDULE_ROUNDS`]. Coverage only grows as
//! the window widens, but a long enough break keeps exposing new weeks,
//! so the cap can be reached. The last computed week count is returned,
//! with break weeks recomputed over its full window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::domain::calendar::{
    add_days, days_between, normalize_skip_weeks, weekday_index, BreakRange,
};
use crate::domain::foundation::Weekday;

/// Upper bound on fixed-point rounds.
pub const MAX_SCHEDULE_ROUNDS: u32 = 12;

/// Everything the resolver needs for one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub start_date: NaiveDate,
    pub paid_weeks: u32,
    #[serde(default)]
    pub skip_weeks: Vec<i64>,
    /// Weekdays with class. Empty means every day counts.
    #[serde(default)]
    pub course_days: BTreeSet<Weekday>,
    pub end_day: Weekday,
    #[serde(default)]
    pub break_ranges: Vec<BreakRange>,
}

/// Derived schedule for one student. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Calendar weeks spanned, always `>= paid_weeks`.
    pub schedule_weeks: u32,
    pub normalized_skip_weeks: Vec<u32>,
    /// Weeks (1-indexed from the start date) touched by a break range,
    /// including those that are also skip weeks.
    pub break_week_set: BTreeSet<u32>,
    /// Last day of the schedule, always on the course's end day.
    pub end_date: NaiveDate,
    pub rounds: u32,
    pub converged: bool,
}

impl ScheduleResult {
    /// Zero-length result for degenerate input.
    fn empty(start_date: NaiveDate) -> Self {
        Self {
            schedule_weeks: 0,
            normalized_skip_weeks: Vec::new(),
            break_week_set: BTreeSet::new(),
            end_date: start_date,
            rounds: 0,
            converged: true,
        }
    }

    /// Break weeks that extend the schedule (not already skip weeks).
    pub fn extra_break_weeks(&self) -> BTreeSet<u32> {
        self.break_week_set
            .iter()
            .copied()
            .filter(|w| !self.normalized_skip_weeks.contains(w))
            .collect()
    }

    /// Returns true if `week` is neither skipped nor touched by a break.
    pub fn is_attended_week(&self, week: u32) -> bool {
        !self.normalized_skip_weeks.contains(&week) && !self.break_week_set.contains(&week)
    }
}

/// Resolver for schedule weeks and end dates.
pub struct ScheduleResolver;

impl ScheduleResolver {
    /// Resolves the schedule for one student.
    ///
    /// # Edge Cases
    /// - `paid_weeks == 0`: returns a zero-week schedule ending on the start date
    /// - Cap reached: returns the last computed values with `converged = false`
    /// - Week counts saturate at `u32::MAX` instead of overflowing
    pub fn resolve(input: &ScheduleInput) -> ScheduleResult {
        if input.paid_weeks == 0 {
            return ScheduleResult::empty(input.start_date);
        }

        let skip_weeks = normalize_skip_weeks(&input.skip_weeks, input.paid_weeks);
        let base_weeks = input
            .paid_weeks
            .saturating_add(u32::try_from(skip_weeks.len()).unwrap_or(u32::MAX));

        let mut schedule_weeks = base_weeks;
        let mut previous_count = 0usize;
        let mut break_week_set = BTreeSet::new();
        let mut rounds = 0;
        let mut converged = false;

        while rounds < MAX_SCHEDULE_ROUNDS {
            rounds += 1;
            let end_date = end_date_for_weeks(input.start_date, schedule_weeks, input.end_day);
            break_week_set = break_weeks(
                input.start_date,
                end_date,
                &input.course_days,
                &input.break_ranges,
            );
            let count = break_week_set
                .iter()
                .filter(|w| !skip_weeks.contains(w))
                .count();

            if count == previous_count {
                converged = true;
                break;
            }
            previous_count = count;
            schedule_weeks = base_weeks.saturating_add(u32::try_from(count).unwrap_or(u32::MAX));
        }

        let end_date = end_date_for_weeks(input.start_date, schedule_weeks, input.end_day);

        if !converged {
            // The last round widened the window; cover the weeks it added.
            break_week_set = break_weeks(
                input.start_date,
                end_date,
                &input.course_days,
                &input.break_ranges,
            );
            warn!(
                start_date = %input.start_date,
                paid_weeks = input.paid_weeks,
                schedule_weeks,
                "schedule did not converge within {} rounds",
                MAX_SCHEDULE_ROUNDS
            );
        }

        debug!(
            start_date = %input.start_date,
            %end_date,
            paid_weeks = input.paid_weeks,
            schedule_weeks,
            rounds,
            "schedule resolved"
        );

        ScheduleResult {
            schedule_weeks,
            normalized_skip_weeks: skip_weeks,
            break_week_set,
            end_date,
            rounds,
            converged,
        }
    }
}

/// Last day of a `weeks`-long schedule, anchored on `end_day`.
///
/// Moves `(weeks - 1) * 7` days forward, then rolls to `end_day`: within
/// the same week when the landing weekday index is `<= end_day`'s,
/// otherwise in the following week. `weeks == 0` is treated as 1.
pub fn end_date_for_weeks(start_date: NaiveDate, weeks: u32, end_day: Weekday) -> NaiveDate {
    let offset = i64::from(weeks.max(1) - 1) * 7;
    let landing = add_days(start_date, offset);
    let current = weekday_index(landing);
    let target = end_day.index();
    let roll = if current <= target {
        target - current
    } else {
        7 - current + target
    };
    add_days(landing, i64::from(roll))
}

/// 1-indexed week of `date` counted in seven-day blocks from `start_date`.
///
/// Dates before the start fall in week 0.
pub fn week_of(start_date: NaiveDate, date: NaiveDate) -> u32 {
    let offset = days_between(start_date, date);
    if offset < 0 {
        0
    } else {
        (offset / 7) as u32 + 1
    }
}

/// Returns true if `date` is a class day for the given day set.
pub fn is_class_day(course_days: &BTreeSet<Weekday>, date: NaiveDate) -> bool {
    course_days.is_empty() || course_days.contains(&Weekday::of(date))
}

/// Weeks within `[start_date, end_date]` whose class days hit a break range.
pub fn break_weeks(
    start_date: NaiveDate,
    end_date: NaiveDate,
    course_days: &BTreeSet<Weekday>,
    break_ranges: &[BreakRange],
) -> BTreeSet<u32> {
    let mut weeks = BTreeSet::new();
    for range in break_ranges
        .iter()
        .filter(|r| r.intersects(start_date, end_date))
    {
        let mut day = range.start().max(start_date);
        let last = range.end().min(end_date);
        while day <= last {
            if is_class_day(course_days, day) {
                weeks.insert(week_of(start_date, day));
            }
            if day == NaiveDate::MAX {
                break;
            }
            day = add_days(day, 1);
        }
    }
    weeks
}

/// End date a registration should be persisted with.
///
/// Registration and attendance records call this instead of
/// re-deriving the day count, so stored end dates match quotes.
pub fn registration_end_date(input: &ScheduleInput) -> NaiveDate {
    ScheduleResolver::resolve(input).end_date
}
