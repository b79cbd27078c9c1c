//! Kanban Domain Types
//!
//! This module contains the data structures shared by the server and the
//! board client:
//!
//! - `Board` / `BoardMember` - Top-level project containers and their sharing records
//! - `List` - An ordered column of cards within a board
//! - `Card` - A task item with a position inside one list
//! - `Notification` - Informational inbox entries for a user
//! - `auth` - Registration and login payloads
//!
//! Request and response payloads for the HTTP API live next to the entity
//! they operate on.
//!
//! # Usage
//!
//! ```rust
//! use kanflow::shared::kanban::{Board, Card, List, OrderUpdate};
//! ```

pub mod auth;
pub mod board;
pub mod card;
pub mod list;
pub mod notification;

// Re-export all types
pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use board::{
    Board, BoardMember, BoardRole, BoardView, CreateBoardRequest, InviteMemberRequest,
    InviteMemberResponse, ListBoardsResponse, SharedBoard,
};
pub use card::{
    Card, CreateCardRequest, MoveCardRequest, OrderUpdate, ReorderCardsRequest,
    ReorderResponse, UpdateCardDetailsRequest,
};
pub use list::{CreateListRequest, List, ReorderListsRequest};
pub use notification::{Notification, NotificationAck};
