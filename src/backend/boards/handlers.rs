/**
 * Board Handlers
 *
 * - `POST /api/boards` - Create a board owned by the caller
 * - `GET /api/boards` - Owned and shared boards
 * - `GET /api/boards/{id}` - One board with the caller's role
 * - `POST /api/boards/{id}/invite` - Owner invites a registered user by email
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_email;
use crate::backend::boards::access::require_board_access;
use crate::backend::boards::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::kanban::{
    Board, BoardView, CreateBoardRequest, InviteMemberRequest, InviteMemberResponse,
    ListBoardsResponse,
};
use crate::shared::validation::validate_title;

/// Create a new board
pub async fn create_board(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> Result<Json<Board>, BackendError> {
    let Json(request) = payload?;
    let title = validate_title("title", &request.title)?;

    let board = db::create_board(&pool, &title, user.user_id).await?;
    tracing::info!("Board {} created by {}", board.id, user.user_id);
    Ok(Json(board))
}

/// Boards owned by the caller plus boards shared with them
pub async fn list_boards(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListBoardsResponse>, BackendError> {
    let my_boards = db::owned_boards(&pool, user.user_id).await?;
    let shared_boards = db::shared_boards(&pool, user.user_id).await?;
    Ok(Json(ListBoardsResponse {
        my_boards,
        shared_boards,
    }))
}

/// One board, with the role the caller holds on it
///
/// # Errors
///
/// * `404 Not Found` - Unknown board
/// * `403 Forbidden` - Caller is neither owner nor member
pub async fn get_board(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<BoardView>, BackendError> {
    let Path(board_id) = path?;
    let user_role = require_board_access(&mut *pool.acquire().await?, board_id, user.user_id)
        .await?;
    let board = db::get_board(&pool, board_id)
        .await?
        .ok_or_else(|| BackendError::not_found("board"))?;
    Ok(Json(BoardView { board, user_role }))
}

/// Invite a registered user to the board
///
/// The membership and the invitee's notification are written together.
///
/// # Errors
///
/// * `404 Not Found` - Unknown board, or no user with that email
/// * `403 Forbidden` - Caller is not the owner
/// * `400 Bad Request` - Caller invited themselves
/// * `409 Conflict` - Invitee is already a member
pub async fn invite_member(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<InviteMemberRequest>, JsonRejection>,
) -> Result<Json<InviteMemberResponse>, BackendError> {
    let Path(board_id) = path?;
    let Json(request) = payload?;

    let board = db::get_board(&pool, board_id)
        .await?
        .ok_or_else(|| BackendError::not_found("board"))?;
    if board.owner_id != user.user_id {
        tracing::warn!("Non-owner {} tried to invite to board {}", user.user_id, board_id);
        return Err(BackendError::forbidden("Only the owner can invite members"));
    }

    let invitee = get_user_by_email(&pool, request.email.trim())
        .await?
        .ok_or_else(|| BackendError::not_found("user"))?;
    if invitee.id == user.user_id {
        return Err(BackendError::validation("You cannot invite yourself"));
    }
    if db::is_member(&pool, board_id, invitee.id).await? {
        return Err(BackendError::conflict("User is already a member of this board"));
    }

    let message = format!("You have been invited to join the board \"{}\"", board.title);
    let member = db::add_member_with_notification(
        &pool,
        board_id,
        invitee.id,
        request.role.unwrap_or_default(),
        &message,
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            BackendError::conflict("User is already a member of this board")
        }
        other => BackendError::from(other),
    })?;

    tracing::info!("User {} invited to board {}", invitee.id, board_id);
    Ok(Json(InviteMemberResponse {
        message: "Invitation sent successfully!".to_string(),
        member,
    }))
}
