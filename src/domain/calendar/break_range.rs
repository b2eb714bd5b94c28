//! Course-wide break (holiday) ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date_only::parse_date_only;

/// An inclusive range of calendar days with no classes.
///
/// Construction through [`BreakRange::new`] guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RangeBounds")]
pub struct BreakRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RangeBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl From<RangeBounds> for BreakRange {
    fn from(bounds: RangeBounds) -> Self {
        Self::new(bounds.start, bounds.end)
    }
}

impl BreakRange {
    /// Creates a range, swapping the bounds if they are given reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A single-day break.
    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls inside the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if the range shares at least one day with `[from, to]`.
    pub fn intersects(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start <= to && from <= self.end
    }
}

/// A break range as it arrives from a catalog file or form: either bound
/// may be missing or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBreakRange {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl RawBreakRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Parses both bounds; `None` if either is missing or invalid.
    pub fn parse(&self) -> Option<BreakRange> {
        let start = parse_date_only(&self.start)?;
        let end = parse_date_only(&self.end)?;
        Some(BreakRange::new(start, end))
    }
}

/// Normalizes raw break ranges.
///
/// Entries with a missing or unparseable bound are dropped, reversed
/// bounds are swapped, and the result is sorted by `(start, end)`.
/// Overlapping ranges are kept as separate entries.
pub fn normalize_break_ranges(raw: &[RawBreakRange]) -> Vec<BreakRange> {
    let mut ranges: Vec<BreakRange> = raw.iter().filter_map(RawBreakRange::parse).collect();
    ranges.sort();
    ranges
}
