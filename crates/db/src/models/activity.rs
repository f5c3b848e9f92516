//! Activity ledger models: completed study sessions and derived stats.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wird_core::types::{DbId, Timestamp};

/// A row from the `activity_records` table.
///
/// Immutable once created; the ledger is append-only and its canonical
/// read order is `completed_at DESC`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityRecord {
    pub id: DbId,
    pub user_id: DbId,
    pub surah: i32,
    pub start_ayah: i32,
    pub end_ayah: i32,
    pub kind: String,
    pub accuracy: i32,
    pub duration_secs: i32,
    pub completed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a completed session to the ledger.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivity {
    pub surah: i32,
    pub start_ayah: i32,
    pub end_ayah: i32,
    pub kind: String,
    pub accuracy: i32,
    pub duration_secs: i32,
}

/// Aggregated study stats for one user, computed on read.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityStats {
    /// Total hifz (memorization) sessions recorded.
    pub total_hifz: i64,
    /// Total muraja (review) sessions recorded.
    pub total_muraja: i64,
    /// Sessions recorded on the reference day.
    pub today_activity: i64,
    /// Consecutive-day streak ending at the reference day.
    pub streak: i64,
}
