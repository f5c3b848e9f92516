//! Competition and score ledger models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wird_core::types::{DbId, Timestamp};

/// A row from the `competitions` table.
///
/// `status` holds one of the `wird_core::competition::CompetitionStatus`
/// strings; transitions are administered externally and the engine only
/// reads them through the joinability gate.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Competition {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a competition (administrator operation).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompetition {
    pub name: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

/// A row from the `competition_scores` table.
///
/// Exactly one row per (competition, user), enforced by
/// `uq_competition_scores_pair`. The row's existence is what "joined"
/// means; score and ayah_count only ever grow, by atomic increments.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompetitionScore {
    pub id: DbId,
    pub competition_id: DbId,
    pub user_id: DbId,
    pub score: i32,
    pub ayah_count: i32,
    pub last_activity_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One ranked leaderboard line for a competition.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: DbId,
    pub score: i32,
    pub ayah_count: i32,
}
