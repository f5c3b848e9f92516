//! Repository for the `review_schedules` table.
//!
//! One logical entry per (user, passage range). Find-or-create and the
//! count increment run as a single `ON CONFLICT` upsert so two concurrent
//! first reviews of the same range cannot create two rows; the due-date
//! write happens in the same transaction, against the row the upsert
//! already locked.

use chrono::NaiveDate;
use sqlx::PgPool;
use wird_core::passage::PassageRange;
use wird_core::review;
use wird_core::types::DbId;

use crate::error::DbResult;
use crate::models::review_schedule::ReviewSchedule;

/// Column list for `review_schedules` queries.
const COLUMNS: &str = "id, user_id, surah, start_ayah, end_ayah, next_review_date, \
                       review_count, created_at, updated_at";

/// Provides spaced-review scheduling over the `review_schedules` table.
pub struct ReviewScheduleRepo;

impl ReviewScheduleRepo {
    /// Record a completed review of a passage range.
    ///
    /// Creates the schedule entry if absent, increments `review_count`,
    /// and sets `next_review_date` from the spacing curve in
    /// `wird_core::review` and the new count. The returned entry's due
    /// date is strictly after `review_date`.
    pub async fn record_review(
        pool: &PgPool,
        user_id: DbId,
        range: PassageRange,
        review_date: NaiveDate,
    ) -> DbResult<ReviewSchedule> {
        range.validate()?;

        let mut tx = pool.begin().await?;

        let upsert = format!(
            "INSERT INTO review_schedules \
                 (user_id, surah, start_ayah, end_ayah, review_count, next_review_date) \
             VALUES ($1, $2, $3, $4, 1, $5) \
             ON CONFLICT (user_id, surah, start_ayah, end_ayah) DO UPDATE SET \
                 review_count = review_schedules.review_count + 1, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, ReviewSchedule>(&upsert)
            .bind(user_id)
            .bind(range.surah)
            .bind(range.start_ayah)
            .bind(range.end_ayah)
            .bind(review::next_due_date(review_date, 1))
            .fetch_one(&mut *tx)
            .await?;

        // The upsert cannot know the post-increment count ahead of time,
        // so the due date is written in a second statement on the locked
        // row.
        let due = review::next_due_date(review_date, entry.review_count);
        let update = format!(
            "UPDATE review_schedules SET next_review_date = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, ReviewSchedule>(&update)
            .bind(entry.id)
            .bind(due)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(entry)
    }

    /// Schedule entries due on or before `as_of`, soonest first.
    pub async fn due_for_review(
        pool: &PgPool,
        user_id: DbId,
        as_of: NaiveDate,
    ) -> Result<Vec<ReviewSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM review_schedules \
             WHERE user_id = $1 AND next_review_date <= $2 \
             ORDER BY next_review_date, surah, start_ayah"
        );
        sqlx::query_as::<_, ReviewSchedule>(&query)
            .bind(user_id)
            .bind(as_of)
            .fetch_all(pool)
            .await
    }

    /// A user's full review schedule, soonest due first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReviewSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM review_schedules \
             WHERE user_id = $1 \
             ORDER BY next_review_date, surah, start_ayah"
        );
        sqlx::query_as::<_, ReviewSchedule>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find the schedule entry for one passage range, if any.
    pub async fn find_entry(
        pool: &PgPool,
        user_id: DbId,
        range: PassageRange,
    ) -> Result<Option<ReviewSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM review_schedules \
             WHERE user_id = $1 AND surah = $2 AND start_ayah = $3 AND end_ayah = $4"
        );
        sqlx::query_as::<_, ReviewSchedule>(&query)
            .bind(user_id)
            .bind(range.surah)
            .bind(range.start_ayah)
            .bind(range.end_ayah)
            .fetch_optional(pool)
            .await
    }
}
