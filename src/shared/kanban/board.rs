//! Board Data Structures
//!
//! Boards are owned by one user and optionally shared with others through
//! membership records carrying a role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a user holds on a board
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum BoardRole {
    /// Creator of the board
    Owner,
    /// Invited collaborator allowed to edit lists and cards
    #[default]
    Editor,
}

impl BoardRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardRole::Owner => "owner",
            BoardRole::Editor => "editor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "owner" => Some(BoardRole::Owner),
            "editor" => Some(BoardRole::Editor),
            _ => None,
        }
    }
}

/// A project board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct Board {
    /// Unique board ID
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// User who created the board
    pub owner_id: Uuid,
    /// When the board was created
    pub created_at: DateTime<Utc>,
}

/// Membership record granting a non-owner access to a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct BoardMember {
    pub board_id: Uuid,
    pub user_id: Uuid,
    pub role: BoardRole,
    pub joined_at: DateTime<Utc>,
}

/// A board shared with the current user, with the role they hold on it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, sqlx::FromRow)]
pub struct SharedBoard {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub board: Board,
    pub role: BoardRole,
}

/// A single board as seen by the requesting user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardView {
    #[serde(flatten)]
    pub board: Board,
    /// Role of the requesting user on this board
    pub user_role: BoardRole,
}

/// Request to create a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoardRequest {
    pub title: String,
}

/// Response for `GET /api/boards`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListBoardsResponse {
    /// Boards owned by the caller, newest first
    pub my_boards: Vec<Board>,
    /// Boards the caller was invited to, most recently joined first
    pub shared_boards: Vec<SharedBoard>,
}

/// Request to invite a user to a board by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteMemberRequest {
    pub email: String,
    /// Defaults to `editor`
    #[serde(default)]
    pub role: Option<BoardRole>,
}

/// Response for a successful invitation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteMemberResponse {
    pub message: String,
    pub member: BoardMember,
}
