//! Weekday enum with Sunday-first indexing.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, indexed 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[serde(alias = "sun")]
    Sunday,
    #[serde(alias = "mon")]
    Monday,
    #[serde(alias = "tue")]
    Tuesday,
    #[serde(alias = "wed")]
    Wednesday,
    #[serde(alias = "thu")]
    Thursday,
    #[serde(alias = "fri")]
    Friday,
    #[serde(alias = "sat")]
    Saturday,
}

impl Weekday {
    /// Returns all weekdays in index order (Sunday first).
    pub fn all() -> &'static [Weekday] {
        &[
            Weekday::Sunday,
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ]
    }

    /// Returns the 0-based index (0 = Sunday).
    pub fn index(&self) -> u32 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// Returns the weekday for an index, wrapping modulo 7.
    pub fn from_index(index: u32) -> Self {
        Self::all()[(index % 7) as usize]
    }

    /// Returns the weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Returns the three-letter label used in display strings.
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::from_index(day.num_days_from_sunday())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_sunday_first() {
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
    }

    #[test]
    fn from_index_roundtrips_and_wraps() {
        for day in Weekday::all() {
            assert_eq!(Weekday::from_index(day.index()), *day);
        }
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
    }

    #[test]
    fn of_matches_calendar() {
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(Weekday::of(monday), Weekday::Monday);
        let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(Weekday::of(sunday), Weekday::Sunday);
    }

    #[test]
    fn deserializes_full_and_short_names() {
        let full: Weekday = serde_json::from_str("\"friday\"").unwrap();
        let short: Weekday = serde_json::from_str("\"fri\"").unwrap();
        assert_eq!(full, Weekday::Friday);
        assert_eq!(short, Weekday::Friday);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Weekday::Tuesday).unwrap(), "\"tuesday\"");
    }
}
