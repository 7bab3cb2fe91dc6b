// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced by the user store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No user: {0}")]
    NotFound(String),
    #[error("That username already exists.")]
    DuplicateUsername,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Duplicate,
    InvalidCredentials,
    Internal,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::DuplicateUsername => ErrorKind::Duplicate,
            StoreError::InvalidCredentials => ErrorKind::InvalidCredentials,
            StoreError::Database(_) | StoreError::Hash(_) | StoreError::Task(_) => {
                ErrorKind::Internal
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Duplicate => StatusCode::CONFLICT,
            ErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Postgres SQLSTATEs
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

fn has_sqlstate(err: &sqlx::Error, code: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(code),
        _ => false,
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, UNIQUE_VIOLATION)
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    has_sqlstate(err, FOREIGN_KEY_VIOLATION)
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    status: u16,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self.kind() {
            ErrorKind::Internal => {
                tracing::error!("request failed: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };
        let body = ErrorResponse {
            error: ErrorBody {
                message,
                status: status.as_u16(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_clients_display() {
        assert_eq!(StoreError::NotFound("bob".into()).to_string(), "No user: bob");
        assert_eq!(StoreError::DuplicateUsername.to_string(), "That username already exists.");
        assert_eq!(StoreError::InvalidCredentials.to_string(), "Invalid username or password");
    }

    #[test]
    fn kinds_map_to_http_statuses() {
        assert_eq!(StoreError::NotFound("bob".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(StoreError::DuplicateUsername.status(), StatusCode::CONFLICT);
        assert_eq!(StoreError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            StoreError::Database(sqlx::Error::RowNotFound).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound));
    }
}
