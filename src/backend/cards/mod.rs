//! Cards Module
//!
//! Task items positioned inside a list. Cards are created at the end of
//! their list, moved one at a time or reordered in batches, and archived
//! instead of deleted.

/// Card queries
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_card, get_cards, move_card, reorder_cards, update_card_details};
