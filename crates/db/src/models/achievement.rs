//! Achievement models. Earned achievements are append-only; the policy
//! that awards them lives outside the engine.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wird_core::types::{DbId, Timestamp};

/// A row from the `achievements` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub earned_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording an earned achievement.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAchievement {
    pub title: String,
    pub description: String,
    pub icon: String,
}
