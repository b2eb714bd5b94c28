//! Display-time configuration for a course.
//!
//! Catalog files carry four historical shapes for a course's time:
//!
//! | Shape | Example | Becomes |
//! |-------|---------|---------|
//! | plain string | `"Mon-Fri 19:00"` | `Fixed` |
//! | online/offline record | `{type: onoff, online: .., offline: ..}` | `OnOff` |
//! | option list | `{type: dynamic, options: [{label, time}]}` | `Dynamic` |
//! | bare label map | `{Morning: "09:00", Evening: "19:00"}` | `Dynamic` |
//!
//! The shape is decided once when the catalog is deserialized.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::CourseType;

/// One selectable time slot of a dynamic-time course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOption {
    pub label: String,
    pub time: String,
}

impl TimeOption {
    pub fn new(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            time: time.into(),
        }
    }
}

/// How a course's display time is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", from = "RawTimeSpec")]
pub enum TimeSpec {
    /// One time for everyone.
    Fixed { time: String },
    /// Time depends on the chosen course type; fee does not.
    #[serde(rename = "onoff")]
    OnOff { online: String, offline: String },
    /// Student picks a labelled slot; fee does not change.
    Dynamic { options: Vec<TimeOption> },
}

impl TimeSpec {
    pub fn fixed(time: impl Into<String>) -> Self {
        TimeSpec::Fixed { time: time.into() }
    }

    /// Returns true if a course type must be chosen.
    ///
    /// Dynamic-time courses run both online and offline, so they ask for
    /// a course type even though it does not pick the time.
    pub fn requires_course_type(&self) -> bool {
        matches!(self, TimeSpec::OnOff { .. } | TimeSpec::Dynamic { .. })
    }

    /// Returns true if a time option must be chosen.
    pub fn requires_option(&self) -> bool {
        matches!(self, TimeSpec::Dynamic { .. })
    }

    /// Finds a dynamic option by label.
    pub fn option(&self, label: &str) -> Option<&TimeOption> {
        match self {
            TimeSpec::Dynamic { options } => options.iter().find(|o| o.label == label),
            _ => None,
        }
    }

    /// Resolves the display time for a selection.
    ///
    /// Returns `None` when the selection needed by the shape is missing or
    /// does not match an option.
    pub fn resolve(
        &self,
        course_type: Option<CourseType>,
        option_label: Option<&str>,
    ) -> Option<&str> {
        match self {
            TimeSpec::Fixed { time } => Some(time.as_str()),
            TimeSpec::OnOff { online, offline } => match course_type? {
                CourseType::Online => Some(online.as_str()),
                CourseType::Offline => Some(offline.as_str()),
            },
            TimeSpec::Dynamic { .. } => self.option(option_label?).map(|o| o.time.as_str()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimeSpec {
    Plain(String),
    Tagged(TaggedTimeSpec),
    Labels(LabelMap),
}

/// Bare `label: time` map, kept in file order.
struct LabelMap(Vec<TimeOption>);

impl<'de> Deserialize<'de> for LabelMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LabelMapVisitor;

        impl<'de> Visitor<'de> for LabelMapVisitor {
            type Value = LabelMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of time-slot labels to times")
            }

            fn visit_map<M>(self, mut map: M) -> Result<LabelMap, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut options: Vec<TimeOption> = Vec::new();
                while let Some((label, time)) = map.next_entry::<String, String>()? {
                    match options.iter_mut().find(|o| o.label == label) {
                        Some(existing) => existing.time = time,
                        None => options.push(TimeOption { label, time }),
                    }
                }
                Ok(LabelMap(options))
            }
        }

        deserializer.deserialize_map(LabelMapVisitor)
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedTimeSpec {
    Fixed {
        time: String,
    },
    #[serde(rename = "onoff")]
    OnOff {
        online: String,
        offline: String,
    },
    Dynamic {
        options: Vec<TimeOption>,
    },
}

impl From<RawTimeSpec> for TimeSpec {
    fn from(raw: RawTimeSpec) -> Self {
        match raw {
            RawTimeSpec::Plain(time) => TimeSpec::Fixed { time },
            RawTimeSpec::Tagged(TaggedTimeSpec::Fixed { time }) => TimeSpec::Fixed { time },
            RawTimeSpec::Tagged(TaggedTimeSpec::OnOff { online, offline }) => {
                TimeSpec::OnOff { online, offline }
            }
            RawTimeSpec::Tagged(TaggedTimeSpec::Dynamic { options }) => {
                TimeSpec::Dynamic { options }
            }
            RawTimeSpec::Labels(LabelMap(options)) => TimeSpec::Dynamic { options },
        }
    }
}
