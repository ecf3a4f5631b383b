//! Store error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Store could not be reached, authenticated, or prepared at startup
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Statement failed (timeout, constraint violation, dropped connection)
    #[error("{0}")]
    Query(#[from] sqlx::Error),

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
}
