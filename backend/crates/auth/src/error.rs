//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required request fields are missing
    #[error("All fields are required")]
    MissingFields,

    /// Field-level validation failure (bad email format, empty password, ...)
    #[error("{0}")]
    Validation(String),

    /// Password and confirmation do not match
    #[error("Password and confirm password do not match")]
    PasswordMismatch,

    /// Email already has a registered user
    #[error("User is already registered")]
    EmailTaken,

    /// No user record for the given email or id
    #[error("User is not registered")]
    UserNotFound,

    /// Wrong password for a registered user
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token on a protected request
    #[error("Unauthorized user, no token")]
    MissingToken,

    /// Session or reset token failed verification (bad signature, expired)
    #[error("Unauthorized user")]
    InvalidToken,

    /// Password hashing primitive failure
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Reset mail could not be delivered
    #[error("Failed to send the password reset email")]
    Mail(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields
            | AuthError::Validation(_)
            | AuthError::PasswordMismatch => StatusCode::BAD_REQUEST,
            AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::PasswordHash(_)
            | AuthError::Mail(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingFields
            | AuthError::Validation(_)
            | AuthError::PasswordMismatch => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::PasswordHash(_)
            | AuthError::Mail(_)
            | AuthError::Database(_)
            | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Client-facing message
    ///
    /// 5xx causes are logged server-side and replaced with a generic
    /// message here; internals are never echoed to clients.
    fn client_message(&self) -> String {
        match self {
            AuthError::PasswordHash(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                "Something went wrong".to_string()
            }
            AuthError::Mail(_) => "Failed to send the password reset email".to_string(),
            other => other.to_string(),
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.client_message())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(msg) => {
                tracing::error!(message = %msg, "Password hashing error");
            }
            AuthError::Mail(msg) => {
                tracing::error!(message = %msg, "Reset mail delivery error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::MissingToken | AuthError::InvalidToken => {
                tracing::warn!("Rejected request with missing or invalid token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        // Value objects report validation problems as BadRequest AppErrors
        if err.kind() == ErrorKind::BadRequest {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}
