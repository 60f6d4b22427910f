use crate::types::DbId;

/// Domain-level error shared by every layer above `core`.
///
/// Repositories surface raw `sqlx::Error`; the logic layer translates
/// storage failures into these variants before they reach the UI.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
