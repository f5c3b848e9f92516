//! Daily activity streak calculation.
//!
//! The streak is a read-time projection over the activity ledger: it is
//! never stored, so it cannot drift from the records that define it. The
//! input is the distinct set of UTC calendar days with at least one
//! activity record, most-recent first, so the walk is O(distinct active
//! days) rather than O(records).

use chrono::{Days, NaiveDate};

/// Count consecutive active days ending at `as_of`.
///
/// `activity_dates` must be distinct calendar days in descending order.
/// For offset i = 0, 1, 2, ... the streak continues while the i-th most
/// recent active day equals `as_of - i` days; the first miss stops the
/// walk.
///
/// Policy: the reference day itself must be active. A user who has not yet
/// studied today sees 0, even if yesterday closed an N-day run. Callers
/// wanting the "as of yesterday" reading pass yesterday as `as_of`.
pub fn current_streak(activity_dates: &[NaiveDate], as_of: NaiveDate) -> i64 {
    let mut streak = 0;
    for (i, date) in activity_dates.iter().enumerate() {
        let expected = match as_of.checked_sub_days(Days::new(i as u64)) {
            Some(d) => d,
            None => break,
        };
        if *date == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
