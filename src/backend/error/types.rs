/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend. Each variant maps
 * to one HTTP status code; store errors are mapped so that internal details
 * never reach the response body.
 *
 * # Error Categories
 *
 * ## Request Errors
 *
 * - Malformed JSON or an empty reorder batch
 * - Missing or invalid bearer token
 * - Access to a board the caller is not a member of
 *
 * ## Store Errors
 *
 * - A referenced row does not exist
 * - A batch statement failed inside its transaction (whole batch rolled back)
 * - Any other sqlx failure
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// ```rust
/// use kanflow::backend::error::BackendError;
///
/// let err = BackendError::validation("cards must be a non-empty array");
/// assert_eq!(err.status_code().as_u16(), 400);
///
/// let err = BackendError::not_found("card");
/// assert_eq!(err.message(), "card not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Malformed request payload
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// Missing or invalid credential
    #[error("Not authorized")]
    NotAuthorized,

    /// Login with an unknown email or a wrong password
    #[error("Invalid credential")]
    InvalidCredentials,

    /// Caller lacks access to the resource
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Referenced entity does not exist
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Uniqueness conflict
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// A multi-statement write failed and was rolled back
    #[error("Transaction failed: {message}")]
    TransactionFailure { message: String },

    /// Shared validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Store error outside a batch transaction
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Password hashing or token signing failed
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a new not-found error for `entity`
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new transaction failure
    pub fn transaction(message: impl Into<String>) -> Self {
        Self::TransactionFailure {
            message: message.into(),
        }
    }

    /// Create a new internal error; `message` is logged, never sent
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` - 400 Bad Request
    /// - `NotAuthorized`, `InvalidCredentials` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found (also `sqlx::Error::RowNotFound`)
    /// - `Conflict` - 409 Conflict
    /// - `TransactionFailure`, `DatabaseError`, `Internal` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::NotAuthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::TransactionFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::DatabaseError(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message sent to the client
    ///
    /// Store failures are reported generically; their details only go to
    /// the log.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::NotAuthorized => "Not Authorized".to_string(),
            Self::InvalidCredentials => "Invalid Credential".to_string(),
            Self::Forbidden { message } => message.clone(),
            Self::NotFound { entity } => format!("{} not found", entity),
            Self::Conflict { message } => message.clone(),
            Self::TransactionFailure { .. } => "Server Error".to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(sqlx::Error::RowNotFound) => "Not found".to_string(),
            Self::DatabaseError(_) | Self::Internal { .. } => "Server Error".to_string(),
        }
    }
}
