//! Lists Module
//!
//! Ordered columns of a board. New lists are appended with
//! `max(order) + 1`; display order is ascending `order`, ties by id.

/// List queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_list, get_lists, reorder_lists};
