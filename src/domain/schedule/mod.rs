//! Schedule module - Pure calendar calculations for a student's course span.
//!
//! # Components
//!
//! - `ScheduleResolver` - Fixed-point resolution of schedule weeks and end date
//! - `class_days` - Attended class dates and recording-date eligibility
//!
//! All functions are pure and synchronous. The same resolver backs live fee
//! previews and persisted registration end dates.

mod class_days;
mod resolver;

pub use class_days::{
    class_dates, filter_recording_dates, get_available_recording_dates, total_class_days,
};
pub use resolver::{
    break_weeks, end_date_for_weeks, is_class_day, registration_end_date, week_of,
    ScheduleInput, ScheduleResolver, ScheduleResult, MAX_SCHEDULE_ROUNDS,
};
