//! Repository error type and constraint-violation translation

use sqlx::error::ErrorKind;

use crate::models::ValidationError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Row missing or owned by someone else; the two cases are reported alike.
    #[error("{resource} not found or unauthorized")]
    NotFoundOrUnauthorized { resource: &'static str },

    #[error("{resource} already exists: {name}")]
    Conflict { resource: &'static str, name: String },

    #[error("constraint violated: {constraint}")]
    Constraint { constraint: String },

    /// Input rejected before reaching the store.
    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),
}

/// Constraint class of a database error, if the store reported one.
pub(crate) fn violation_kind(err: &sqlx::Error) -> Option<ErrorKind> {
    match err {
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::Other => None,
            kind => Some(kind),
        },
        _ => None,
    }
}

fn constraint_name(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db) => db.constraint().unwrap_or("unknown").to_owned(),
        _ => "unknown".to_owned(),
    }
}

/// Translate an insert failure on a table with a unique `name` column.
pub(crate) fn map_unique_name(err: sqlx::Error, resource: &'static str, name: &str) -> DbError {
    match violation_kind(&err) {
        Some(ErrorKind::UniqueViolation) => DbError::Conflict {
            resource,
            name: name.to_owned(),
        },
        Some(ErrorKind::CheckViolation) => DbError::Constraint {
            constraint: constraint_name(&err),
        },
        _ => DbError::Sqlx(err),
    }
}

/// Translate a reservation insert failure.
///
/// An unknown name resolves to NULL in the insert's subquery; the store
/// rejects that with either a NOT NULL or a foreign-key violation.
pub(crate) fn map_reference(err: sqlx::Error, resource: &'static str, id: String) -> DbError {
    match violation_kind(&err) {
        Some(ErrorKind::NotNullViolation) | Some(ErrorKind::ForeignKeyViolation) => {
            DbError::NotFound { resource, id }
        }
        Some(ErrorKind::CheckViolation) => DbError::Constraint {
            constraint: constraint_name(&err),
        },
        _ => DbError::Sqlx(err),
    }
}
