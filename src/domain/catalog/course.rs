//! Course definition - one immutable catalog entry.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{RecordingAvailability, TimeSpec};
use crate::domain::calendar::{normalize_break_ranges, BreakRange, RawBreakRange};
use crate::domain::foundation::{CourseKey, Weekday};

fn default_min_weeks() -> u32 {
    1
}

fn default_max_weeks() -> u32 {
    52
}

fn deserialize_break_ranges<'de, D>(deserializer: D) -> Result<Vec<BreakRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawBreakRange>::deserialize(deserializer)?;
    Ok(normalize_break_ranges(&raw))
}

/// A catalog entry as edited by administrators.
///
/// Read-only to the engine. Break ranges are normalized while the entry
/// is deserialized, so malformed ranges never reach the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub key: CourseKey,
    pub name: String,
    pub weekly_fee: u64,
    /// Weekly fee when the math component is excluded.
    #[serde(default)]
    pub math_excluded_weekly_fee: Option<u64>,
    /// Weekdays with class. Empty means every day counts.
    #[serde(default)]
    pub class_days: BTreeSet<Weekday>,
    /// Weekdays a student may start on. Empty means any day.
    #[serde(default)]
    pub allowed_start_days: BTreeSet<Weekday>,
    /// Weekday every schedule cycle ends on.
    pub end_day: Weekday,
    #[serde(default = "default_min_weeks")]
    pub min_weeks: u32,
    #[serde(default = "default_max_weeks")]
    pub max_weeks: u32,
    #[serde(default, deserialize_with = "deserialize_break_ranges")]
    pub break_ranges: Vec<BreakRange>,
    #[serde(default)]
    pub recording: RecordingAvailability,
    #[serde(default)]
    pub time: Option<TimeSpec>,
    /// Campus name to the course holding that campus's fee and time.
    #[serde(default)]
    pub campuses: BTreeMap<String, CourseKey>,
    /// Selectable levels for level-based course families.
    #[serde(default)]
    pub levels: Vec<String>,
}

impl CourseDefinition {
    /// Creates a minimal definition; the rest is filled with `with_*` builders.
    pub fn new(key: CourseKey, name: impl Into<String>, weekly_fee: u64, end_day: Weekday) -> Self {
        Self {
            key,
            name: name.into(),
            weekly_fee,
            math_excluded_weekly_fee: None,
            class_days: BTreeSet::new(),
            allowed_start_days: BTreeSet::new(),
            end_day,
            min_weeks: default_min_weeks(),
            max_weeks: default_max_weeks(),
            break_ranges: Vec::new(),
            recording: RecordingAvailability::default(),
            time: None,
            campuses: BTreeMap::new(),
            levels: Vec::new(),
        }
    }

    pub fn with_class_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.class_days = days.into_iter().collect();
        self
    }

    pub fn with_start_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.allowed_start_days = days.into_iter().collect();
        self
    }

    pub fn with_week_range(mut self, min_weeks: u32, max_weeks: u32) -> Self {
        self.min_weeks = min_weeks;
        self.max_weeks = max_weeks;
        self
    }

    pub fn with_break_ranges(mut self, mut ranges: Vec<BreakRange>) -> Self {
        ranges.sort();
        self.break_ranges = ranges;
        self
    }

    pub fn with_recording(mut self, recording: RecordingAvailability) -> Self {
        self.recording = recording;
        self
    }

    pub fn with_time(mut self, time: TimeSpec) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_math_excluded_fee(mut self, fee: u64) -> Self {
        self.math_excluded_weekly_fee = Some(fee);
        self
    }

    pub fn with_campus(mut self, campus: impl Into<String>, target: CourseKey) -> Self {
        self.campuses.insert(campus.into(), target);
        self
    }

    pub fn with_levels(mut self, levels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.levels = levels.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if a start on `weekday` is permitted.
    pub fn allows_start_on(&self, weekday: Weekday) -> bool {
        self.allowed_start_days.is_empty() || self.allowed_start_days.contains(&weekday)
    }

    /// Returns true if the fee and time come from a per-campus course.
    pub fn is_dynamic_campus(&self) -> bool {
        !self.campuses.is_empty()
    }

    /// Returns true if a level must be chosen.
    pub fn is_level_family(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Time spec in effect when fee and time come from `source`.
    ///
    /// `source` is this course or its campus-linked course; a linked course
    /// without its own time inherits this one.
    pub fn time_for<'a>(&'a self, source: &'a CourseDefinition) -> Option<&'a TimeSpec> {
        source.time.as_ref().or(self.time.as_ref())
    }

    /// Returns true if `weeks` is within `[min_weeks, max_weeks]`.
    pub fn accepts_paid_weeks(&self, weeks: u32) -> bool {
        (self.min_weeks..=self.max_weeks).contains(&weeks)
    }
}
