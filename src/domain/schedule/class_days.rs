//! Class-day enumeration and recording-date eligibility.
//!
//! Week membership is by day offset from the start date, never by raw
//! weekday number, so day sets that wrap the week boundary (for example
//! Saturday + Sunday ending on Sunday) are counted correctly.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use super::resolver::{break_weeks, is_class_day, week_of, ScheduleInput, ScheduleResult};
use crate::domain::calendar::{add_days, parse_date_only, BreakRange};
use crate::domain::foundation::Weekday;

/// Class dates a student attends: every class weekday in
/// `[start_date, end_date]` outside skip weeks and break-affected weeks.
pub fn class_dates(input: &ScheduleInput, schedule: &ScheduleResult) -> Vec<NaiveDate> {
    if schedule.schedule_weeks == 0 {
        return Vec::new();
    }

    let mut dates = Vec::new();
    let mut day = input.start_date;
    while day <= schedule.end_date {
        if is_class_day(&input.course_days, day)
            && schedule.is_attended_week(week_of(input.start_date, day))
        {
            dates.push(day);
        }
        if day == NaiveDate::MAX {
            break;
        }
        day = add_days(day, 1);
    }
    dates
}

/// Number of class days a student attends.
pub fn total_class_days(input: &ScheduleInput, schedule: &ScheduleResult) -> u32 {
    class_dates(input, schedule).len() as u32
}

/// Dates a student may pick as recorded-lecture days.
///
/// Covers `schedule_weeks` seven-day blocks from `start_date`, keeps
/// dates on `allowed_days`, and drops skip weeks plus every week a break
/// range touches. `skip_weeks` must already be normalized.
pub fn get_available_recording_dates(
    start_date: NaiveDate,
    schedule_weeks: u32,
    allowed_days: &BTreeSet<Weekday>,
    skip_weeks: &[u32],
    break_ranges: &[BreakRange],
) -> Vec<NaiveDate> {
    if schedule_weeks == 0 {
        return Vec::new();
    }

    let window_end = add_days(start_date, i64::from(schedule_weeks) * 7 - 1);
    let blocked = break_weeks(start_date, window_end, allowed_days, break_ranges);

    (0..i64::from(schedule_weeks) * 7)
        .map(|offset| add_days(start_date, offset))
        .filter(|day| is_class_day(allowed_days, *day))
        .filter(|day| {
            let week = week_of(start_date, *day);
            !skip_weeks.contains(&week) && !blocked.contains(&week)
        })
        .collect()
}

/// Parses selected recording dates and keeps the available ones.
///
/// Unparseable and duplicate selections are dropped; output is ascending.
pub fn filter_recording_dates<S: AsRef<str>>(
    selected: &[S],
    available: &[NaiveDate],
) -> Vec<NaiveDate> {
    let chosen: BTreeSet<NaiveDate> = selected
        .iter()
        .filter_map(|raw| parse_date_only(raw.as_ref()))
        .filter(|day| available.contains(day))
        .collect();
    chosen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::ScheduleResolver;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(list: &[Weekday]) -> BTreeSet<Weekday> {
        list.iter().copied().collect()
    }

    fn mon_to_fri() -> BTreeSet<Weekday> {
        days(&[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ])
    }

    fn weekday_input(paid_weeks: u32) -> ScheduleInput {
        ScheduleInput {
            start_date: date(2025, 3, 3),
            paid_weeks,
            skip_weeks: vec![],
            course_days: mon_to_fri(),
            end_day: Weekday::Friday,
            break_ranges: vec![],
        }
    }

    #[test]
    fn two_weeks_monday_to_friday_is_ten_days() {
        let input = weekday_input(2);
        let schedule = ScheduleResolver::resolve(&input);
        assert_eq!(total_class_days(&input, &schedule), 10);
    }

    #[test]
    fn weekend_course_wraps_week_boundary() {
        // 2025-03-08 is a Saturday.
        let input = ScheduleInput {
            start_date: date(2025, 3, 8),
            paid_weeks: 2,
            skip_weeks: vec![],
            course_days: days(&[Weekday::Saturday, Weekday::Sunday]),
            end_day: Weekday::Sunday,
            break_ranges: vec![],
        };
        let schedule = ScheduleResolver::resolve(&input);
        assert_eq!(schedule.end_date, date(2025, 3, 16));
        assert_eq!(
            class_dates(&input, &schedule),
            vec![date(2025, 3, 8), date(2025, 3, 9), date(2025, 3, 15), date(2025, 3, 16)]
        );
    }

    #[test]
    fn skipped_and_break_weeks_are_not_attended() {
        let mut input = weekday_input(3);
        input.skip_weeks = vec![2];
        input.break_ranges = vec![BreakRange::single_day(date(2025, 3, 19))];
        let schedule = ScheduleResolver::resolve(&input);
        assert_eq!(schedule.schedule_weeks, 5);
        assert_eq!(total_class_days(&input, &schedule), 15);
    }

    #[test]
    fn mid_week_start_counts_partial_first_week() {
        let mut input = weekday_input(2);
        input.start_date = date(2025, 3, 5); // Wednesday
        let schedule = ScheduleResolver::resolve(&input);
        assert_eq!(schedule.end_date, date(2025, 3, 14));
        assert_eq!(total_class_days(&input, &schedule), 8);
    }

    #[test]
    fn zero_week_schedule_has_no_class_days() {
        let input = weekday_input(0);
        let schedule = ScheduleResolver::resolve(&input);
        assert!(class_dates(&input, &schedule).is_empty());
    }

    #[test]
    fn available_recording_dates_exclude_skip_and_break_weeks() {
        let allowed = days(&[Weekday::Tuesday, Weekday::Thursday]);
        let breaks = vec![BreakRange::single_day(date(2025, 3, 20))];
        let available = get_available_recording_dates(date(2025, 3, 3), 4, &allowed, &[2], &breaks);
        assert_eq!(
            available,
            vec![date(2025, 3, 4), date(2025, 3, 6), date(2025, 3, 25), date(2025, 3, 27)]
        );
    }

    #[test]
    fn available_recording_dates_empty_for_zero_weeks() {
        assert!(get_available_recording_dates(date(2025, 3, 3), 0, &mon_to_fri(), &[], &[]).is_empty());
    }

    #[test]
    fn filter_recording_dates_keeps_only_available() {
        let available = vec![date(2025, 3, 4), date(2025, 3, 6)];
        let selected = ["2025-03-06", "2025-03-05", "bogus", "2025-03-06", "2025-03-04"];
        assert_eq!(
            filter_recording_dates(&selected, &available),
            vec![date(2025, 3, 4), date(2025, 3, 6)]
        );
    }
}
