//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are returned from HTTP handlers and converted to JSON
//! responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse, extractor rejections)
//!
//! # Error Types
//!
//! - `ValidationError` - Malformed input, surfaced before any write (400)
//! - `NotAuthorized` - Missing or invalid bearer credential (401)
//! - `Forbidden` - Authenticated but without access to the board (403)
//! - `NotFound` - Referenced board/list/card/notification does not exist (404)
//! - `Conflict` - Duplicate registration or membership (409)
//! - `TransactionFailure` - A batch write failed and was rolled back (500)
//! - `DatabaseError` - Any other store failure (500)
//!
//! # HTTP Response Conversion
//!
//! All backend errors implement `IntoResponse` from Axum, so handlers can
//! return `Result<_, BackendError>` directly. The body is always
//! `{"error": "...", "status": code}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
