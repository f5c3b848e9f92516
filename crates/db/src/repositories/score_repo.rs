//! Repository for the `competition_scores` table: the score ledger and
//! its leaderboard read paths.
//!
//! A score row's existence is what "joined" means; there is exactly one
//! row per (competition, user), enforced by `uq_competition_scores_pair`.
//! Join uses `ON CONFLICT DO NOTHING` and submit uses a single-row atomic
//! increment, so concurrent writers for the same pair can neither create
//! a duplicate row nor lose an update, and a failed submission leaves the
//! row untouched.

use sqlx::PgPool;
use wird_core::competition::{self, CompetitionStatus};
use wird_core::error::CoreError;
use wird_core::types::{DbId, Timestamp};

use crate::error::DbResult;
use crate::models::competition::{Competition, CompetitionScore, LeaderboardEntry};
use crate::repositories::CompetitionRepo;

/// Column list for `competition_scores` queries.
const COLUMNS: &str = "id, competition_id, user_id, score, ayah_count, last_activity_at, \
                       created_at, updated_at";

/// Leaderboard size when the caller does not specify one.
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 20;

/// Provides join, score accumulation, and ranking over the score ledger.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Join a competition: create a zero-valued score row for the pair if
    /// absent.
    ///
    /// Idempotent: a second join is a no-op success returning the existing
    /// row. Fails with `NotFound` if the competition does not exist and
    /// `NotJoinable` if its status/time-window gate rejects `now`.
    pub async fn join(
        pool: &PgPool,
        competition_id: DbId,
        user_id: DbId,
        now: Timestamp,
    ) -> DbResult<CompetitionScore> {
        Self::joinable_competition(pool, competition_id, now).await?;

        let insert = format!(
            "INSERT INTO competition_scores (competition_id, user_id) \
             VALUES ($1, $2) \
             ON CONFLICT (competition_id, user_id) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        if let Some(entry) = sqlx::query_as::<_, CompetitionScore>(&insert)
            .bind(competition_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        {
            return Ok(entry);
        }

        // The insert hit the unique constraint: the user already joined.
        match Self::find_entry(pool, competition_id, user_id).await? {
            Some(entry) => Ok(entry),
            None => {
                tracing::error!(
                    competition_id,
                    user_id,
                    "Score row vanished between conflicting insert and re-read"
                );
                Err(CoreError::Internal(
                    "score entry missing after idempotent join".into(),
                )
                .into())
            }
        }
    }

    /// Accumulate a score submission for a joined participant.
    ///
    /// The increment is a single atomic UPDATE: score and ayah_count grow
    /// by exactly the accepted deltas once each, regardless of concurrent
    /// submissions for the same pair. Zero rows updated means the user
    /// never joined (`NotAParticipant`).
    pub async fn submit(
        pool: &PgPool,
        competition_id: DbId,
        user_id: DbId,
        score_delta: i32,
        ayah_delta: i32,
        now: Timestamp,
    ) -> DbResult<CompetitionScore> {
        if score_delta < 0 || ayah_delta < 0 {
            return Err(CoreError::Validation(format!(
                "score and ayah deltas must be >= 0, got {score_delta} and {ayah_delta}"
            ))
            .into());
        }
        Self::joinable_competition(pool, competition_id, now).await?;

        let update = format!(
            "UPDATE competition_scores SET \
                 score = score + $3, \
                 ayah_count = ayah_count + $4, \
                 last_activity_at = now(), \
                 updated_at = now() \
             WHERE competition_id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, CompetitionScore>(&update)
            .bind(competition_id)
            .bind(user_id)
            .bind(score_delta)
            .bind(ayah_delta)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotAParticipant("user has not joined this competition".into())
            })?;
        Ok(entry)
    }

    /// Ranked leaderboard for a competition.
    ///
    /// Score descending, ties broken by user id ascending so the ordering
    /// is fully deterministic. Zero-score joiners are included at the
    /// bottom. Pure read.
    pub async fn leaderboard(
        pool: &PgPool,
        competition_id: DbId,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT user_id, score, ayah_count \
             FROM competition_scores \
             WHERE competition_id = $1 \
             ORDER BY score DESC, user_id ASC \
             LIMIT $2",
        )
        .bind(competition_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// A user's total score summed across all competitions.
    ///
    /// Separate read path from the per-competition ranking; feeds the
    /// personal points summary.
    pub async fn total_points(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(score), 0) FROM competition_scores WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Find the score row for one (competition, user) pair.
    pub async fn find_entry(
        pool: &PgPool,
        competition_id: DbId,
        user_id: DbId,
    ) -> Result<Option<CompetitionScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competition_scores \
             WHERE competition_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, CompetitionScore>(&query)
            .bind(competition_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// A user's score rows across all competitions, most recent activity
    /// first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CompetitionScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competition_scores \
             WHERE user_id = $1 \
             ORDER BY last_activity_at DESC"
        );
        sqlx::query_as::<_, CompetitionScore>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Load a competition and pass it through the joinability gate.
    ///
    /// The gate is evaluated at call time on the stored status and window;
    /// it is never cached across calls.
    async fn joinable_competition(
        pool: &PgPool,
        competition_id: DbId,
        now: Timestamp,
    ) -> DbResult<Competition> {
        let comp = CompetitionRepo::find_by_id(pool, competition_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "competition",
                id: competition_id,
            })?;

        let status = CompetitionStatus::parse(&comp.status).ok_or_else(|| {
            tracing::error!(
                competition_id = comp.id,
                status = %comp.status,
                "Unknown competition status in store"
            );
            CoreError::Internal(format!("unknown competition status: {}", comp.status))
        })?;

        if !competition::is_joinable(status, comp.start_at, comp.end_at, now) {
            let reason = competition::not_joinable_reason(status, comp.start_at, comp.end_at, now);
            return Err(CoreError::NotJoinable(reason.into()).into());
        }
        Ok(comp)
    }
}
