use causa_core::error::CoreError;
use causa_core::launch::LaunchError;
use causa_core::types::DbId;
use causa_docview::ViewerError;

/// Application-level error type for the logic layer.
///
/// Wraps [`CoreError`] for domain errors plus the storage, viewer, and
/// launcher error types. The widget layer renders every variant as a
/// modal dialog; the variants exist so it can word them sensibly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `causa-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx that is not a recognized constraint
    /// violation.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A document viewer error.
    #[error(transparent)]
    Viewer(#[from] ViewerError),

    /// A liquidator launch error.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// A filesystem error outside the document store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for service return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for the common "no active row with this id" case.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::Core(CoreError::NotFound { entity, id })
    }

    /// Whether this error is a uniqueness conflict, for callers that
    /// offer a "change the value and retry" flow.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Core(CoreError::Conflict(_)))
    }
}

/// Classify sqlx errors as they cross into the logic layer.
///
/// SQLite reports constraint failures as database errors with a
/// descriptive message ("UNIQUE constraint failed: clients.identification");
/// uniqueness violations become [`CoreError::Conflict`] so the UI can say
/// which field collided, and foreign-key failures become validation
/// errors. Everything else stays a raw database error.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let message = db_err.message();
            if let Some(field) = message.strip_prefix("UNIQUE constraint failed: ") {
                return Self::Core(CoreError::Conflict(format!(
                    "A record with this {field} already exists"
                )));
            }
            if message.contains("FOREIGN KEY constraint failed") {
                return Self::Core(CoreError::Validation(
                    "Operation references a missing row or would orphan existing rows".into(),
                ));
            }
        }
        Self::Database(err)
    }
}
