//! Academy Tuition - course schedule and tuition calculation engine
//!
//! Given a course catalog and a student's choices, this crate derives the
//! calendar span a student attends, the schedule weeks once skips and
//! breaks are added back, the class-day count, and the final tuition split
//! between live and recorded days.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
