//! Translation of sqlx errors into domain errors

use crate::domain::DomainError;

/// Whether the error is a unique-key violation (MySQL `ER_DUP_ENTRY`)
fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}

/// Map a failed INSERT, turning duplicate keys into `Conflict`
pub fn map_write_error(
    error: sqlx::Error,
    context: &str,
    conflict: impl FnOnce() -> String,
) -> DomainError {
    if is_unique_violation(&error) {
        DomainError::conflict(conflict())
    } else {
        DomainError::storage(format!("{}: {}", context, error))
    }
}
