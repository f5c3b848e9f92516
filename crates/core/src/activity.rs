//! Study activity kinds and validation of recorded sessions.

use crate::error::CoreError;

/// Maximum recitation accuracy, in percent.
pub const MAX_ACCURACY: i32 = 100;

/// The kind of study session a user completed.
///
/// Stored as TEXT in the `activity_records` table using the `as_str`
/// values, which match the vocabulary of the rest of the system
/// (hifz = memorization, muraja = review, tilawa = recitation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Hifz,
    Muraja,
    Tilawa,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Hifz => "hifz",
            ActivityKind::Muraja => "muraja",
            ActivityKind::Tilawa => "tilawa",
        }
    }

    /// Parse a stored or client-supplied kind string.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "hifz" => Ok(ActivityKind::Hifz),
            "muraja" => Ok(ActivityKind::Muraja),
            "tilawa" => Ok(ActivityKind::Tilawa),
            other => Err(CoreError::Validation(format!(
                "unknown activity kind: {other}"
            ))),
        }
    }
}

/// Validate the scalar fields of a session before it is appended to the
/// activity ledger. Records are immutable once created, so everything is
/// checked up front.
pub fn validate_session(accuracy: i32, duration_secs: i32) -> Result<(), CoreError> {
    if accuracy < 0 || accuracy > MAX_ACCURACY {
        return Err(CoreError::Validation(format!(
            "accuracy must be between 0 and {MAX_ACCURACY}, got {accuracy}"
        )));
    }
    if duration_secs < 0 {
        return Err(CoreError::Validation(format!(
            "duration_secs must be >= 0, got {duration_secs}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips() {
        for kind in [ActivityKind::Hifz, ActivityKind::Muraja, ActivityKind::Tilawa] {
            assert_eq!(ActivityKind::parse(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_rejected() {
        assert!(ActivityKind::parse("qiraah").is_err());
        assert!(ActivityKind::parse("").is_err());
    }

    #[test]
    fn accuracy_bounds() {
        assert!(validate_session(0, 0).is_ok());
        assert!(validate_session(100, 60).is_ok());
        assert!(validate_session(-1, 60).is_err());
        assert!(validate_session(101, 60).is_err());
    }

    #[test]
    fn negative_duration_rejected() {
        assert!(validate_session(90, -5).is_err());
    }
}
