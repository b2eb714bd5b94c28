//! Integration tests for schedule resolution and fee arithmetic.
//!
//! Covers the reference scenarios end to end through the public API, the
//! overlapping-break regression, and property tests over random inputs.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use academy_tuition::domain::calendar::{add_days, normalize_skip_weeks, BreakRange};
use academy_tuition::domain::foundation::{DiscountRate, Weekday};
use academy_tuition::domain::pricing::split_recording_fee;
use academy_tuition::domain::schedule::{
    class_dates, end_date_for_weeks, get_available_recording_dates, registration_end_date, total_class_days,
    ScheduleInput, ScheduleResolver, MAX_SCHEDULE_ROUNDS,
};

// =============================================================================
// Helpers
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mon_to_fri() -> BTreeSet<Weekday> {
    [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ]
    .into_iter()
    .collect()
}

/// Mon-Fri course ending Friday, starting Monday 2025-03-03.
fn weekday_course(paid_weeks: u32, skip_weeks: Vec<i64>, break_ranges: Vec<BreakRange>) -> ScheduleInput {
    ScheduleInput {
        start_date: date(2025, 3, 3),
        paid_weeks,
        skip_weeks,
        course_days: mon_to_fri(),
        end_day: Weekday::Friday,
        break_ranges,
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn scenario_a_plain_schedule() {
    let result = ScheduleResolver::resolve(&weekday_course(4, vec![], vec![]));
    assert_eq!(result.schedule_weeks, 4);
    assert!(result.converged);
    assert_eq!(result.end_date, date(2025, 3, 28));
}

#[test]
fn scenario_b_one_skip_week() {
    let result = ScheduleResolver::resolve(&weekday_course(4, vec![2], vec![]));
    assert_eq!(result.schedule_weeks, 5);
    assert_eq!(result.normalized_skip_weeks, vec![2]);
    assert_eq!(result.end_date, date(2025, 4, 4));
}

#[test]
fn scenario_c_class_days() {
    let input = weekday_course(2, vec![], vec![]);
    let result = ScheduleResolver::resolve(&input);
    assert_eq!(total_class_days(&input, &result), 10);
}

#[test]
fn scenario_d_recording_split() {
    let total_fee = 100_000 * 2;
    let split = split_recording_fee(total_fee, 10, 2, DiscountRate::NONE);
    assert_eq!(split.recording_fee, 16_000);
    assert_eq!(split.normal_fee, 160_000);
    assert_eq!(split.final_fee, 176_000);
}

#[test]
fn scenario_e_single_break_week_adds_one_week() {
    let baseline = ScheduleResolver::resolve(&weekday_course(4, vec![], vec![]));
    let with_break = ScheduleResolver::resolve(&weekday_course(
        4,
        vec![],
        vec![BreakRange::single_day(date(2025, 3, 12))],
    ));
    assert_eq!(with_break.schedule_weeks, baseline.schedule_weeks + 1);
    assert_eq!(with_break.break_week_set, BTreeSet::from([2]));
}

#[test]
fn break_inside_skip_week_does_not_extend() {
    let result = ScheduleResolver::resolve(&weekday_course(
        4,
        vec![2],
        vec![BreakRange::single_day(date(2025, 3, 12))],
    ));
    assert_eq!(result.schedule_weeks, 5);
    assert!(result.extra_break_weeks().is_empty());
}

#[test]
fn break_on_non_class_day_is_ignored() {
    // 2025-03-15 is a Saturday
    let result = ScheduleResolver::resolve(&weekday_course(
        4,
        vec![],
        vec![BreakRange::single_day(date(2025, 3, 15))],
    ));
    assert_eq!(result.schedule_weeks, 4);
}

// =============================================================================
// Fixed-point behaviour
// =============================================================================

#[test]
fn overlapping_adjacent_breaks_are_counted_once() {
    let result = ScheduleResolver::resolve(&weekday_course(
        4,
        vec![],
        vec![
            BreakRange::new(date(2025, 3, 10), date(2025, 3, 21)),
            BreakRange::new(date(2025, 3, 17), date(2025, 3, 28)),
        ],
    ));
    assert_eq!(result.schedule_weeks, 7);
    assert_eq!(result.break_week_set, BTreeSet::from([2, 3, 4]));
    assert_eq!(result.rounds, 2);
    assert!(result.converged);
}

#[test]
fn break_exposed_by_extension_is_picked_up() {
    // Week 5 only enters the window after week 2's break extends it.
    let result = ScheduleResolver::resolve(&weekday_course(
        4,
        vec![],
        vec![
            BreakRange::single_day(date(2025, 3, 12)),
            BreakRange::single_day(date(2025, 4, 2)),
        ],
    ));
    assert_eq!(result.schedule_weeks, 6);
    assert_eq!(result.break_week_set, BTreeSet::from([2, 5]));
    assert!(result.converged);
}

#[test]
fn long_break_hits_round_cap() {
    let holiday = BreakRange::new(date(2025, 3, 10), date(2026, 3, 10));
    let input = weekday_course(2, vec![], vec![holiday]);
    let result = ScheduleResolver::resolve(&input);
    assert!(!result.converged);
    assert_eq!(result.rounds, MAX_SCHEDULE_ROUNDS);
    assert_eq!(result.schedule_weeks, 14);
    assert_eq!(result.end_date, date(2025, 6, 6));

    // Only week 1 is billable; nothing from the widened last week leaks in.
    let dates = class_dates(&input, &result);
    assert_eq!(dates.len(), 5);
    assert!(dates.iter().all(|d| !holiday.contains(*d)));
    assert_eq!(total_class_days(&input, &result), 5);
}

#[test]
fn registration_end_date_matches_resolver() {
    let input = weekday_course(4, vec![3], vec![BreakRange::single_day(date(2025, 3, 12))]);
    assert_eq!(
        registration_end_date(&input),
        ScheduleResolver::resolve(&input).end_date
    );
    assert_eq!(registration_end_date(&input), date(2025, 4, 11));
}

// =============================================================================
// Week-wrapping day sets
// =============================================================================

#[test]
fn weekend_course_counts_across_week_wrap() {
    // Saturday start, Sat+Sun classes, schedule ends Sunday.
    let input = ScheduleInput {
        start_date: date(2025, 3, 8),
        paid_weeks: 3,
        skip_weeks: vec![],
        course_days: BTreeSet::from([Weekday::Saturday, Weekday::Sunday]),
        end_day: Weekday::Sunday,
        break_ranges: vec![],
    };
    let result = ScheduleResolver::resolve(&input);
    assert_eq!(result.end_date, date(2025, 3, 23));
    assert_eq!(total_class_days(&input, &result), 6);
}

#[test]
fn recording_dates_skip_blocked_weeks() {
    let dates = get_available_recording_dates(
        date(2025, 3, 3),
        3,
        &BTreeSet::from([Weekday::Monday, Weekday::Wednesday]),
        &[2],
        &[BreakRange::single_day(date(2025, 3, 17))],
    );
    assert_eq!(dates, vec![date(2025, 3, 3), date(2025, 3, 5)]);
}

// =============================================================================
// Properties
// =============================================================================

fn any_weekday() -> impl Strategy<Value = Weekday> {
    (0u32..7).prop_map(Weekday::from_index)
}

fn any_start() -> impl Strategy<Value = NaiveDate> {
    (0i64..730).prop_map(|offset| add_days(date(2024, 1, 1), offset))
}

fn any_input() -> impl Strategy<Value = ScheduleInput> {
    (
        any_start(),
        1u32..20,
        prop::collection::vec(-3i64..40, 0..6),
        prop::collection::vec(any_weekday(), 0..8),
        any_weekday(),
        prop::collection::vec((0i64..200, 0i64..30), 0..3),
    )
        .prop_map(|(start_date, paid_weeks, skip_weeks, days, end_day, breaks)| {
            let break_ranges = breaks
                .into_iter()
                .map(|(offset, len)| {
                    let from = add_days(start_date, offset);
                    BreakRange::new(from, add_days(from, len))
                })
                .collect();
            ScheduleInput {
                start_date,
                paid_weeks,
                skip_weeks,
                course_days: days.into_iter().collect(),
                end_day,
                break_ranges,
            }
        })
}

proptest! {
    #[test]
    fn skip_weeks_normalization_is_idempotent(
        raw in prop::collection::vec(-5i64..60, 0..10),
        paid in 0u32..30,
    ) {
        let once = normalize_skip_weeks(&raw, paid);
        let again: Vec<i64> = once.iter().map(|w| i64::from(*w)).collect();
        prop_assert_eq!(normalize_skip_weeks(&again, paid), once);
    }

    #[test]
    fn skip_weeks_are_bounded(
        raw in prop::collection::vec(-5i64..60, 0..10),
        paid in 0u32..30,
    ) {
        let weeks = normalize_skip_weeks(&raw, paid);
        let ceiling = paid + weeks.len() as u32;
        prop_assert!(weeks.iter().all(|w| *w >= 2 && *w <= ceiling));
        prop_assert!(weeks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn schedule_never_shorter_than_paid(input in any_input()) {
        let result = ScheduleResolver::resolve(&input);
        prop_assert!(result.schedule_weeks >= input.paid_weeks);
        prop_assert!(result.rounds <= MAX_SCHEDULE_ROUNDS);
        prop_assert_eq!(Weekday::of(result.end_date), input.end_day);
    }

    #[test]
    fn schedule_equals_paid_without_skips_or_breaks(
        start in any_start(),
        paid in 1u32..30,
        end_day in any_weekday(),
    ) {
        let input = ScheduleInput {
            start_date: start,
            paid_weeks: paid,
            skip_weeks: vec![],
            course_days: BTreeSet::new(),
            end_day,
            break_ranges: vec![],
        };
        let result = ScheduleResolver::resolve(&input);
        prop_assert_eq!(result.schedule_weeks, paid);
        prop_assert_eq!(result.rounds, 1);
    }

    #[test]
    fn end_date_lands_on_end_day(
        start in any_start(),
        weeks in 0u32..60,
        end_day in any_weekday(),
    ) {
        let end = end_date_for_weeks(start, weeks, end_day);
        prop_assert_eq!(Weekday::of(end), end_day);
        prop_assert!(end >= start);
        prop_assert!(end.num_days_from_ce() - start.num_days_from_ce() < i32::try_from(weeks.max(1)).unwrap() * 7 + 7);
    }

    #[test]
    fn split_without_recording_matches_discounted_total(
        total in 0u64..10_000_000,
        class_days in 1u32..100,
        percent in 0u8..100,
    ) {
        let discount = DiscountRate::from_percent(percent).unwrap();
        let split = split_recording_fee(total, class_days, 0, discount);
        let expected = (total as f64 * (1.0 - discount.value())).round() as i64;
        prop_assert!((split.final_fee as i64 - expected).abs() <= 1);
        prop_assert_eq!(split.recording_fee, 0);
    }
}
