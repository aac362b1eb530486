//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Login required")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(column) => {
                DomainError::Validation(format!("{column} is already taken"))
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// A unique constraint rejected the write. Carries the column name when
    /// the store reports it.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    pub fn is_constraint_on(&self, column: &str) -> bool {
        matches!(self, RepoError::Constraint(c) if c == column)
    }
}
