//! Skip-week normalization.

/// Week 1 may never be skipped.
pub const FIRST_SKIPPABLE_WEEK: i64 = 2;

/// Cleans a requested skip-week list against the paid-week count.
///
/// Keeps deduplicated, ascending weeks `w` with `w >= 2` and
/// `w <= paid_weeks + retained_count`. The ceiling depends on how many
/// weeks are retained, so the filter is reapplied until the retained
/// count stops shrinking. Each pass can only drop weeks, so this takes
/// at most `raw.len()` passes.
///
/// Returns an empty list when `paid_weeks` is zero.
pub fn normalize_skip_weeks(raw: &[i64], paid_weeks: u32) -> Vec<u32> {
    if paid_weeks == 0 {
        return Vec::new();
    }

    let mut retained: Vec<i64> = raw
        .iter()
        .copied()
        .filter(|w| *w >= FIRST_SKIPPABLE_WEEK)
        .collect();
    retained.sort_unstable();
    retained.dedup();

    loop {
        let ceiling = i64::from(paid_weeks) + retained.len() as i64;
        let before = retained.len();
        retained.retain(|w| *w <= ceiling);
        if retained.len() == before {
            break;
        }
    }

    retained.into_iter().map(|w| w as u32).collect()
}
