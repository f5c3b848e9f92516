use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository layer and any
/// consuming request layer.
///
/// Joinability and participation failures are terminal for the call that
/// produced them; the engine never retries business-rule failures.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Competition status/time-window gate failed for a join or submission.
    #[error("Competition is not joinable: {0}")]
    NotJoinable(String),

    /// Score submitted for a competition the user never joined.
    #[error("Not a participant: {0}")]
    NotAParticipant(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
