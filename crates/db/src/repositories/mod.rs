//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Plain reads return
//! `sqlx::Error`; operations that enforce business rules (joinability,
//! participation, input validation) return [`crate::error::DbResult`].

pub mod achievement_repo;
pub mod activity_repo;
pub mod competition_repo;
pub mod review_schedule_repo;
pub mod score_repo;

pub use achievement_repo::AchievementRepo;
pub use activity_repo::ActivityRepo;
pub use competition_repo::CompetitionRepo;
pub use review_schedule_repo::ReviewScheduleRepo;
pub use score_repo::ScoreRepo;
