//! Errors detected before a request reaches the store
//!
//! Raised by the checks in `shared::validation`; the backend turns them into
//! `400 Bad Request` responses.
//!
//! ```rust
//! use kanflow::shared::error::SharedError;
//!
//! let err = SharedError::validation("title", "must not be empty");
//! assert_eq!(err.to_string(), "Invalid title: must not be empty");
//! ```
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl SharedError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = SharedError::validation("cards", "must be a non-empty array");
        assert_eq!(err.field(), "cards");
        assert_eq!(err.to_string(), "Invalid cards: must be a non-empty array");
    }
}
