/**
 * List Handlers
 *
 * - `POST /api/lists` - Append a list to a board
 * - `GET /api/lists/{board_id}` - Lists of a board in display order
 * - `PATCH /api/lists/reorder` - Batch order write
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

use crate::backend::boards::access::require_board_access;
use crate::backend::error::BackendError;
use crate::backend::lists::db;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::reorder::{apply_batch, OrderedTable};
use crate::shared::kanban::{CreateListRequest, List, ReorderListsRequest, ReorderResponse};
use crate::shared::validation::validate_title;

/// Create a list at the end of the board
pub async fn create_list(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> Result<Json<List>, BackendError> {
    let Json(request) = payload?;
    let title = validate_title("title", &request.title)?;
    require_board_access(&mut *pool.acquire().await?, request.board_id, user.user_id)
        .await?;

    let list = db::create_list(&pool, &title, request.board_id).await?;
    tracing::debug!("List {} appended at {}", list.id, list.order);
    Ok(Json(list))
}

/// Lists of a board, ascending order
pub async fn get_lists(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<List>>, BackendError> {
    let Path(board_id) = path?;
    require_board_access(&mut *pool.acquire().await?, board_id, user.user_id)
        .await?;
    Ok(Json(db::lists_for_board(&pool, board_id).await?))
}

/// Apply a batch of list order writes atomically
///
/// # Errors
///
/// * `400 Bad Request` - Body is not `{lists: [...]}` or the array is empty
/// * `404 Not Found` - An id matches no list; nothing is written
/// * `500 Internal Server Error` - A write failed; nothing is written
pub async fn reorder_lists(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ReorderListsRequest>, JsonRejection>,
) -> Result<Json<ReorderResponse>, BackendError> {
    let Json(request) = payload?;
    let updated = apply_batch(&pool, OrderedTable::Lists, user.user_id, &request.lists).await?;
    Ok(Json(ReorderResponse { updated }))
}
