//! List Data Structure
//!
//! A list is a named column of cards. Its `order` positions it left-to-right
//! among the sibling lists of the same board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::kanban::card::OrderUpdate;
use crate::shared::position::Ordered;

/// An ordered column within a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct List {
    pub id: Uuid,
    pub title: String,
    pub board_id: Uuid,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

impl Ordered for List {
    fn id(&self) -> Uuid {
        self.id
    }

    fn order(&self) -> i64 {
        self.order
    }

    fn set_order(&mut self, order: i64) {
        self.order = order;
    }
}

/// Request to create a list at the end of a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
    pub board_id: Uuid,
}

/// Body of `PATCH /api/lists/reorder`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderListsRequest {
    pub lists: Vec<OrderUpdate>,
}
