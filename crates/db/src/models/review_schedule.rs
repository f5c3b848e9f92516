//! Spaced-review schedule models.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use wird_core::types::{DbId, Timestamp};

/// A row from the `review_schedules` table.
///
/// One logical entry per (user, passage range), enforced by
/// `uq_review_schedules_user_range`. `review_count` never decreases and
/// `next_review_date` is always strictly after the review that set it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewSchedule {
    pub id: DbId,
    pub user_id: DbId,
    pub surah: i32,
    pub start_ayah: i32,
    pub end_ayah: i32,
    pub next_review_date: NaiveDate,
    pub review_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
