//! Spaced-review scheduling curve.
//!
//! The stored model only has `review_count` and `next_review_date`; the
//! growth law relating them is a policy choice. The one here is a fixed
//! table for the first reviews followed by a linear tail, chosen so the
//! interval is a deterministic, strictly increasing function of
//! `review_count` alone. Tests pin the exact values so the schedule can
//! be asserted end to end.

use chrono::{Days, NaiveDate};

/// Days until the next review for reviews 1 through 7.
const INTERVAL_TABLE: [i64; 7] = [1, 3, 7, 14, 30, 60, 90];

/// Interval growth per review beyond the table, in days.
const TAIL_STEP_DAYS: i64 = 30;

/// Days between the `review_count`-th completed review of a passage and
/// its next due date.
///
/// Strictly increasing in `review_count` and always >= 1, so the next due
/// date is strictly after the review that produced it. Counts below 1 are
/// treated as 1 (a freshly created schedule).
pub fn interval_days(review_count: i32) -> i64 {
    let count = review_count.max(1) as usize;
    if count <= INTERVAL_TABLE.len() {
        INTERVAL_TABLE[count - 1]
    } else {
        let last = INTERVAL_TABLE[INTERVAL_TABLE.len() - 1];
        last + TAIL_STEP_DAYS * (count - INTERVAL_TABLE.len()) as i64
    }
}

/// Next due date after completing the `review_count`-th review on
/// `review_date`.
pub fn next_due_date(review_date: NaiveDate, review_count: i32) -> NaiveDate {
    review_date
        .checked_add_days(Days::new(interval_days(review_count) as u64))
        // interval_days is bounded well below the chrono date range
        .unwrap_or(NaiveDate::MAX)
}
