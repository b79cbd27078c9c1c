//! Boards Module
//!
//! Board creation, listing, sharing, and the access check used by the list
//! and card endpoints.
//!
//! - **`access`** - Caller's role on a board (owner, member, or none)
//! - **`db`** - Board and membership queries
//! - **`handlers`** - HTTP handlers for `/api/boards`

/// Access checks shared by list and card handlers
pub mod access;

/// Board and membership queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_board, get_board, invite_member, list_boards};
