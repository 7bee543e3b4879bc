/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and the
 * auth middleware, plus the error returned while bringing the server up.
 *
 * # Error Categories
 *
 * - Validation: client-correctable, carries every field error
 * - Conflict: email already registered
 * - Authentication: bad credentials, deactivated account, missing or
 *   invalid token (messages are intentionally vague)
 * - Not found: the member behind a valid token no longer exists
 * - Internal: store, hashing, token issuance; logged in full, reported
 *   to the client as a generic message
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::passwords::PasswordError;
use crate::backend::members::StoreError;
use crate::shared::{ConfigError, FieldError};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const ACCOUNT_DEACTIVATED: &str = "Account is deactivated. Please contact the church office.";
pub const TOKEN_REQUIRED: &str = "Access token required";
pub const TOKEN_INVALID: &str = "Invalid or expired token";
pub const EMAIL_TAKEN: &str = "Email is already registered";
pub const MEMBER_NOT_FOUND: &str = "Member not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Errors surfaced by handlers and middleware
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("token issuance failed: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized(INVALID_CREDENTIALS.to_string())
    }

    pub fn account_deactivated() -> Self {
        Self::Unauthorized(ACCOUNT_DEACTIVATED.to_string())
    }

    pub fn token_required() -> Self {
        Self::Unauthorized(TOKEN_REQUIRED.to_string())
    }

    pub fn token_invalid() -> Self {
        Self::Forbidden(TOKEN_INVALID.to_string())
    }

    pub fn member_not_found() -> Self {
        Self::NotFound(MEMBER_NOT_FOUND.to_string())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) | Self::Store(StoreError::DuplicateEmail) => StatusCode::CONFLICT,
            Self::Store(_) | Self::Password(_) | Self::TokenIssue(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show a client
    pub fn message(&self) -> String {
        match self {
            Self::Validation(_) => "Validation failed".to_string(),
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Conflict(message) => message.clone(),
            Self::Store(StoreError::DuplicateEmail) => EMAIL_TAKEN.to_string(),
            Self::Store(_) | Self::Password(_) | Self::TokenIssue(_) => INTERNAL_ERROR.to_string(),
        }
    }

    /// Field errors for validation failures
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Self::Validation(errors) => Some(errors.as_slice()),
            _ => None,
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        Self::BadRequest("Request body must be valid JSON".to_string())
    }
}

/// Errors that abort server startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database schema setup failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
