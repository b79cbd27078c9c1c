//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server over a
//! SQLite store that persists boards, ordered lists and cards, membership
//! and notifications.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT tokens
//! - **`middleware`** - Bearer token authentication
//! - **`boards`** - Boards, membership, access checks
//! - **`lists`** - Ordered lists of a board
//! - **`cards`** - Ordered cards of a list
//! - **`reorder`** - Transactional batch order writes
//! - **`notifications`** - In-app inbox
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs           - Module exports and documentation
//! ├── main.rs          - Server binary
//! ├── server/          - Initialization, config and state
//! ├── routes/          - Route configuration
//! ├── auth/            - Authentication
//! ├── middleware/      - Request middleware
//! ├── boards/          - Boards and access
//! ├── lists/           - Lists
//! ├── cards/           - Cards
//! ├── reorder.rs       - Batch order persistence
//! ├── notifications/   - Notifications
//! └── error/           - Error types
//! ```
//!
//! # Ordering
//!
//! Lists and cards carry an integer `order >= 1` (a CHECK constraint in
//! the schema). Creation appends at `max + 1`; reads sort by `order` then
//! `id`; batch reorders are all-or-nothing.

/// Server initialization and state management
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication
pub mod auth;

/// Request middleware
pub mod middleware;

/// Boards, membership and access checks
pub mod boards;

/// Lists
pub mod lists;

/// Cards
pub mod cards;

/// Batch order persistence
pub mod reorder;

/// Notifications
pub mod notifications;

/// Backend error types
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState, ServerConfig};
