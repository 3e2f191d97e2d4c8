//! Domain-level error types.

use thiserror::Error;

/// Domain errors - input that cannot become an entity.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
