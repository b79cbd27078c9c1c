//! Notifications Module
//!
//! In-app inbox entries. Invitations write them; users read, mark and
//! clear them. Nothing is delivered outside the application.

/// Notification queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{clear_read, list_notifications, mark_read};
