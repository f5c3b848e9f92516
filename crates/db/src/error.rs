use wird_core::error::CoreError;

/// Error type for repository operations that enforce business rules on top
/// of plain storage access.
///
/// Plain reads return `sqlx::Error` directly; gated operations (join,
/// submit, record_review, create with validation) return [`DbError`] so the
/// caller can distinguish domain failures from storage failures. Transient
/// storage failures are for the storage/connection layer to retry; they are
/// never reinterpreted as business errors here.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `wird-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for gated repository operations.
pub type DbResult<T> = Result<T, DbError>;
