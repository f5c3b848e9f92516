//! Repository for the `competitions` table.
//!
//! Creation and status transitions are administrator operations; the
//! scoring side (`ScoreRepo`) only ever reads competitions through the
//! joinability gate.

use sqlx::PgPool;
use wird_core::competition::CompetitionStatus;
use wird_core::error::CoreError;
use wird_core::types::DbId;

use crate::error::DbResult;
use crate::models::competition::{Competition, CreateCompetition};

/// Column list for `competitions` queries.
const COLUMNS: &str = "id, name, description, start_at, end_at, status, created_at, updated_at";

/// Provides CRUD operations for competitions.
pub struct CompetitionRepo;

impl CompetitionRepo {
    /// Create a competition. New competitions start in `active` status.
    pub async fn create(pool: &PgPool, input: &CreateCompetition) -> DbResult<Competition> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("competition name must not be empty".into()).into());
        }
        if input.end_at <= input.start_at {
            return Err(CoreError::Validation(format!(
                "end_at ({}) must be after start_at ({})",
                input.end_at, input.start_at
            ))
            .into());
        }

        let query = format!(
            "INSERT INTO competitions (name, description, start_at, end_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let competition = sqlx::query_as::<_, Competition>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_at)
            .bind(input.end_at)
            .fetch_one(pool)
            .await?;
        Ok(competition)
    }

    /// Find a competition by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Competition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM competitions WHERE id = $1");
        sqlx::query_as::<_, Competition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active competitions, newest first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Competition>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM competitions \
             WHERE status = 'active' \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Competition>(&query).fetch_all(pool).await
    }

    /// Set a competition's status (administrator transition).
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: CompetitionStatus,
    ) -> DbResult<Competition> {
        let query = format!(
            "UPDATE competitions SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let competition = sqlx::query_as::<_, Competition>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "competition",
                id,
            })?;
        Ok(competition)
    }

    /// Number of participants (score rows) in a competition.
    pub async fn participant_count(pool: &PgPool, id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM competition_scores WHERE competition_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
