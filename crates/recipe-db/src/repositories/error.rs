//! Error handling utilities for repositories
//!
//! Constraint violations are classified here so that a bad reference or a
//! rejected value surfaces as a client error instead of a generic 500.

use recipe_core::{DomainError, Id};
use sqlx::error::{DatabaseError, ErrorKind};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.kind() {
            ErrorKind::ForeignKeyViolation => {
                return DomainError::InvalidReference(describe_reference(db_err));
            }
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                return DomainError::ValidationError(db_err.message().to_string());
            }
            _ => {}
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

fn describe_reference(db_err: &dyn DatabaseError) -> String {
    match db_err.constraint() {
        Some(constraint) => format!("referenced record does not exist ({constraint})"),
        None => "referenced record does not exist".to_string(),
    }
}

pub fn user_not_found(id: Id) -> DomainError {
    DomainError::UserNotFound(id)
}

pub fn recipe_not_found(id: Id) -> DomainError {
    DomainError::RecipeNotFound(id)
}

pub fn comment_not_found(id: Id) -> DomainError {
    DomainError::CommentNotFound(id)
}

pub fn category_not_found(id: Id) -> DomainError {
    DomainError::CategoryNotFound(id)
}
