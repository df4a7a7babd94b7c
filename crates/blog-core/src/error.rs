//! Domain-level error types.

use thiserror::Error;

/// Store-level errors.
///
/// An absent post is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    /// A mutation addressed a row that no longer exists.
    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
