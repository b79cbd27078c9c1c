//! Card Data Structure
//!
//! Cards belong to exactly one list at a time. Their `order` positions them
//! top-to-bottom among the sibling cards of that list; archived cards drop
//! out of the active ordering but keep their stored order.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::position::Ordered;

/// A task item positioned inside a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Card {
    /// Unique card ID
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Owning list
    pub list_id: Uuid,
    /// Position key among sibling cards, ascending
    pub order: i64,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Archived cards are hidden from default retrieval
    pub is_archived: bool,
    /// When the card was created
    pub created_at: DateTime<Utc>,
}

impl Ordered for Card {
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

/// One `{id, order}` pair of a batch reorder
///
/// `list_id` is only meaningful for card batches: when present the card is
/// moved to that list inside the same transaction as the order write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderUpdate {
    pub id: Uuid,
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<Uuid>,
}

impl OrderUpdate {
    pub fn new(id: Uuid, order: i64) -> Self {
        Self {
            id,
            order,
            list_id: None,
        }
    }
}

/// Request to create a card at the end of a list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCardRequest {
    pub title: String,
    pub list_id: Uuid,
}

/// Body of `PUT /api/cards/{id}`: move a single card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveCardRequest {
    pub list_id: Uuid,
    pub order: i64,
}

/// Body of `PATCH /api/cards/reorder`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReorderCardsRequest {
    pub cards: Vec<OrderUpdate>,
}

/// Result of a batch reorder
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReorderResponse {
    /// Number of rows written
    pub updated: u64,
}

/// Body of `PUT /api/cards/{id}/details`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCardDetailsRequest {
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_archived: bool,
}
