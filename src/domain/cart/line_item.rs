//! Priced cart line item.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CourseKey, LineItemId};
use crate::domain::pricing::CourseSelection;

/// A priced course selection held by the caller's cart.
///
/// The engine keeps no reference to it after creation. The original
/// selection rides along so the item can be edited and re-priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub course_key: CourseKey,
    pub display_name: String,
    pub final_fee: u64,
    pub normal_fee: u64,
    pub recording_fee: u64,
    /// Undiscounted `weekly_fee * paid_weeks`.
    pub base_fee: u64,
    pub total_class_days: u32,
    pub recording_days: u32,
    pub schedule_weeks: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub time_display: Option<String>,
    pub duration_label: String,
    pub selection: CourseSelection,
}

impl CartLineItem {
    /// Amount saved against the undiscounted fee.
    pub fn savings(&self) -> u64 {
        self.base_fee.saturating_sub(self.final_fee)
    }
}

/// Sum of final fees across a cart.
pub fn cart_total(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| item.final_fee).sum()
}
