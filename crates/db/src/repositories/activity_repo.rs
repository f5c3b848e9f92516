//! Repository for the `activity_records` table (the activity ledger).
//!
//! The ledger is append-only: records are inserted and read, never
//! updated. Streaks and stats are computed on read from the ledger so they
//! cannot drift from it.

use chrono::NaiveDate;
use sqlx::PgPool;
use wird_core::activity::{self, ActivityKind};
use wird_core::passage::PassageRange;
use wird_core::streak;
use wird_core::types::DbId;

use crate::error::DbResult;
use crate::models::activity::{ActivityRecord, ActivityStats, CreateActivity};

/// Column list for `activity_records` queries.
const COLUMNS: &str = "id, user_id, surah, start_ayah, end_ayah, kind, accuracy, \
                       duration_secs, completed_at, created_at, updated_at";

/// Provides append and read operations for the activity ledger.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append a completed study session to the ledger.
    ///
    /// Validates the kind, passage range, accuracy, and duration before
    /// inserting; the record is immutable afterwards. `completed_at`
    /// defaults to the insertion time.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateActivity,
    ) -> DbResult<ActivityRecord> {
        let kind = ActivityKind::parse(&input.kind)?;
        PassageRange::new(input.surah, input.start_ayah, input.end_ayah).validate()?;
        activity::validate_session(input.accuracy, input.duration_secs)?;

        let query = format!(
            "INSERT INTO activity_records \
                 (user_id, surah, start_ayah, end_ayah, kind, accuracy, duration_secs) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        let record = sqlx::query_as::<_, ActivityRecord>(&query)
            .bind(user_id)
            .bind(input.surah)
            .bind(input.start_ayah)
            .bind(input.end_ayah)
            .bind(kind.as_str())
            .bind(input.accuracy)
            .bind(input.duration_secs)
            .fetch_one(pool)
            .await?;
        Ok(record)
    }

    /// List a user's most recent sessions, `completed_at` descending.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<ActivityRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_records \
             WHERE user_id = $1 \
             ORDER BY completed_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, ActivityRecord>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Distinct UTC calendar days with at least one record, most recent
    /// first.
    ///
    /// This is the projection the streak walk consumes: its size is the
    /// number of distinct active days, not the number of records.
    pub async fn distinct_activity_dates(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        sqlx::query_scalar::<_, NaiveDate>(
            "SELECT DISTINCT (completed_at AT TIME ZONE 'UTC')::date AS activity_day \
             FROM activity_records \
             WHERE user_id = $1 \
             ORDER BY activity_day DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Consecutive-day activity streak ending at `as_of`.
    ///
    /// Pure read; see `wird_core::streak` for the walk and the
    /// must-include-reference-day policy.
    pub async fn current_streak(
        pool: &PgPool,
        user_id: DbId,
        as_of: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let dates = Self::distinct_activity_dates(pool, user_id).await?;
        Ok(streak::current_streak(&dates, as_of))
    }

    /// Aggregated study stats for a user as of `today`.
    pub async fn stats(
        pool: &PgPool,
        user_id: DbId,
        today: NaiveDate,
    ) -> Result<ActivityStats, sqlx::Error> {
        let (total_hifz, total_muraja, today_activity): (i64, i64, i64) = sqlx::query_as(
            "SELECT COUNT(*) FILTER (WHERE kind = 'hifz'), \
                    COUNT(*) FILTER (WHERE kind = 'muraja'), \
                    COUNT(*) FILTER (WHERE (completed_at AT TIME ZONE 'UTC')::date = $2) \
             FROM activity_records \
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(today)
        .fetch_one(pool)
        .await?;

        let streak = Self::current_streak(pool, user_id, today).await?;

        Ok(ActivityStats {
            total_hifz,
            total_muraja,
            today_activity,
            streak,
        })
    }
}
