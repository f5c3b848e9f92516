//! Competition lifecycle: status vocabulary and the joinability gate.
//!
//! Status transitions are administered outside the engine; join and score
//! submission only ever read them. The gate is evaluated at call time so
//! a competition that was closed or ended between two submissions rejects
//! the later one.

use crate::types::Timestamp;

/// Competition status values, stored as TEXT in the `competitions` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompetitionStatus {
    Active,
    Completed,
    Cancelled,
}

impl CompetitionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionStatus::Active => "active",
            CompetitionStatus::Completed => "completed",
            CompetitionStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a stored status string. Returns `None` for values outside the
    /// vocabulary; callers treat that as a broken row, not bad input.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(CompetitionStatus::Active),
            "completed" => Some(CompetitionStatus::Completed),
            "cancelled" => Some(CompetitionStatus::Cancelled),
            _ => None,
        }
    }
}

/// Whether a competition accepts joins and score submissions at `now`.
///
/// The scoring window is half-open: `start_at` inclusive, `end_at`
/// exclusive.
pub fn is_joinable(
    status: CompetitionStatus,
    start_at: Timestamp,
    end_at: Timestamp,
    now: Timestamp,
) -> bool {
    status == CompetitionStatus::Active && start_at <= now && now < end_at
}

/// Human-readable reason a competition is not joinable, for error payloads.
///
/// Only meaningful when [`is_joinable`] returned false.
pub fn not_joinable_reason(
    status: CompetitionStatus,
    start_at: Timestamp,
    end_at: Timestamp,
    now: Timestamp,
) -> &'static str {
    if status != CompetitionStatus::Active {
        "competition is not active"
    } else if now < start_at {
        "competition has not started yet"
    } else if now >= end_at {
        "competition has ended"
    } else {
        "competition is joinable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn window() -> (Timestamp, Timestamp) {
        let start = Utc::now();
        (start, start + Duration::days(7))
    }

    #[test]
    fn status_round_trips() {
        for status in [
            CompetitionStatus::Active,
            CompetitionStatus::Completed,
            CompetitionStatus::Cancelled,
        ] {
            assert_eq!(CompetitionStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_none() {
        assert_eq!(CompetitionStatus::parse("archived"), None);
        assert_eq!(CompetitionStatus::parse(""), None);
    }

    #[test]
    fn joinable_inside_window() {
        let (start, end) = window();
        let now = start + Duration::days(1);
        assert!(is_joinable(CompetitionStatus::Active, start, end, now));
    }

    #[test]
    fn start_is_inclusive() {
        let (start, end) = window();
        assert!(is_joinable(CompetitionStatus::Active, start, end, start));
    }

    #[test]
    fn end_is_exclusive() {
        let (start, end) = window();
        assert!(!is_joinable(CompetitionStatus::Active, start, end, end));
    }

    #[test]
    fn before_start_rejected() {
        let (start, end) = window();
        let now = start - Duration::seconds(1);
        assert!(!is_joinable(CompetitionStatus::Active, start, end, now));
        assert_eq!(
            not_joinable_reason(CompetitionStatus::Active, start, end, now),
            "competition has not started yet"
        );
    }

    #[test]
    fn after_end_rejected() {
        let (start, end) = window();
        let now = end + Duration::seconds(1);
        assert!(!is_joinable(CompetitionStatus::Active, start, end, now));
        assert_eq!(
            not_joinable_reason(CompetitionStatus::Active, start, end, now),
            "competition has ended"
        );
    }

    #[test]
    fn inactive_status_rejected_even_inside_window() {
        let (start, end) = window();
        let now = start + Duration::days(1);
        for status in [CompetitionStatus::Completed, CompetitionStatus::Cancelled] {
            assert!(!is_joinable(status, start, end, now));
            assert_eq!(
                not_joinable_reason(status, start, end, now),
                "competition is not active"
            );
        }
    }
}
