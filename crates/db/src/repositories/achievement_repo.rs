//! Repository for the `achievements` table.

use sqlx::PgPool;
use wird_core::types::DbId;

use crate::models::achievement::{Achievement, CreateAchievement};

/// Column list for `achievements` queries.
const COLUMNS: &str = "id, user_id, title, description, icon, earned_at, created_at, updated_at";

/// How many achievements the dashboard shows by default.
pub const DEFAULT_RECENT_LIMIT: i64 = 5;

/// Provides append and read operations for earned achievements.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Record an earned achievement. The awarding policy lives outside the
    /// engine; this is a plain append.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateAchievement,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements (user_id, title, description, icon) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.icon)
            .fetch_one(pool)
            .await
    }

    /// A user's most recently earned achievements.
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements \
             WHERE user_id = $1 \
             ORDER BY earned_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
