use sea_orm::{DbErr, SqlErr};

use quill_core::error::RepoError;

/// Translate a failed write into a `RepoError`, naming the violated column
/// when a unique constraint fired on one of `unique_columns`.
pub(crate) fn write_error(err: DbErr, unique_columns: &[&str]) -> RepoError {
    let message = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => Some(msg),
        _ => {
            // Drivers that don't classify errors still say so in the text.
            let text = err.to_string();
            let lower = text.to_lowercase();
            (lower.contains("duplicate") || lower.contains("unique")).then_some(text)
        }
    };

    match message {
        Some(msg) => {
            let lower = msg.to_lowercase();
            let column = unique_columns
                .iter()
                .find(|c| lower.contains(*c))
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unique field".to_string());
            RepoError::Constraint(column)
        }
        None => RepoError::Query(err.to_string()),
    }
}

pub(crate) fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
