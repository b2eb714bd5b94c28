//! Splits a total fee between live and recorded class days.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DiscountRate;

/// Share of the daily fee charged for a recorded day. Not discounted.
pub const RECORDING_RATE: f64 = 0.4;

/// Fee breakdown after discount and recording split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingSplit {
    pub normal_fee: u64,
    pub recording_fee: u64,
    pub final_fee: u64,
}

fn round_fee(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    }
}

/// Splits `total_fee` across class days.
///
/// Recorded days are charged at [`RECORDING_RATE`] of the daily fee with
/// no discount; live days get the discount. Without recorded days the
/// whole fee is discounted in one step, and zero class days gives a
/// zero split.
pub fn split_recording_fee(
    total_fee: u64,
    total_class_days: u32,
    recording_days: u32,
    discount: DiscountRate,
) -> RecordingSplit {
    if total_class_days == 0 {
        return RecordingSplit::default();
    }

    if recording_days == 0 {
        let normal_fee = round_fee(total_fee as f64 * discount.remaining());
        return RecordingSplit {
            normal_fee,
            recording_fee: 0,
            final_fee: normal_fee,
        };
    }

    let recording_days = recording_days.min(total_class_days);
    let live_days = total_class_days - recording_days;
    let daily = total_fee as f64 / f64::from(total_class_days);

    let recording_fee = round_fee(daily * f64::from(recording_days) * RECORDING_RATE);
    let normal_fee = round_fee(daily * f64::from(live_days) * discount.remaining());

    RecordingSplit {
        normal_fee,
        recording_fee,
        final_fee: recording_fee + normal_fee,
    }
}
