/**
 * Card Handlers
 *
 * - `POST /api/cards` - Append a card to a list
 * - `GET /api/cards/{list_id}` - Active cards of a list
 * - `PUT /api/cards/{id}` - Move one card to `{list_id, order}`
 * - `PUT /api/cards/{id}/details` - Title, due date, archive flag
 * - `PATCH /api/cards/reorder` - Batch order write
 *
 * The single-card move and the batch are independent calls; a client that
 * issues both gets no atomicity across them.
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

use crate::backend::boards::access::{require_card_access, require_list_access};
use crate::backend::cards::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::reorder::{apply_batch, OrderedTable};
use crate::shared::kanban::{
    Card, CreateCardRequest, MoveCardRequest, ReorderCardsRequest, ReorderResponse,
    UpdateCardDetailsRequest,
};
use crate::shared::position::FIRST_ORDER;
use crate::shared::validation::validate_title;

/// Create a card at the end of the list
pub async fn create_card(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<Json<Card>, BackendError> {
    let Json(request) = payload?;
    let title = validate_title("title", &request.title)?;
    require_list_access(&mut *pool.acquire().await?, request.list_id, user.user_id)
        .await?;

    let card = db::create_card(&pool, &title, request.list_id).await?;
    tracing::debug!("Card {} appended at {}", card.id, card.order);
    Ok(Json(card))
}

/// Active cards of a list, ascending order
pub async fn get_cards(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Card>>, BackendError> {
    let Path(list_id) = path?;
    require_list_access(&mut *pool.acquire().await?, list_id, user.user_id)
        .await?;
    Ok(Json(db::active_cards(&pool, list_id).await?))
}

/// Move a single card
///
/// # Errors
///
/// * `400 Bad Request` - `order` below 1, or the list is on another board
/// * `404 Not Found` - Unknown card or destination list
/// * `403 Forbidden` - Caller cannot access the source or destination board
pub async fn move_card(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<MoveCardRequest>, JsonRejection>,
) -> Result<Json<Card>, BackendError> {
    let Path(card_id) = path?;
    let Json(request) = payload?;
    if request.order < FIRST_ORDER {
        return Err(BackendError::validation(format!(
            "Invalid data: order must be at least {}",
            FIRST_ORDER
        )));
    }

    let mut conn = pool.acquire().await?;
    let source_board = require_card_access(&mut conn, card_id, user.user_id).await?;
    let target_board = require_list_access(&mut conn, request.list_id, user.user_id).await?;
    drop(conn);
    if source_board != target_board {
        tracing::warn!("Card {} cannot move to list {} on another board", card_id, request.list_id);
        return Err(BackendError::validation("Card cannot move to another board"));
    }

    let card = db::move_card(&pool, card_id, request.list_id, request.order)
        .await?
        .ok_or_else(|| BackendError::not_found("card"))?;
    tracing::debug!("Card {} moved to list {} at {}", card.id, card.list_id, card.order);
    Ok(Json(card))
}

/// Update title, due date and archive flag
pub async fn update_card_details(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateCardDetailsRequest>, JsonRejection>,
) -> Result<Json<Card>, BackendError> {
    let Path(card_id) = path?;
    let Json(request) = payload?;
    let title = validate_title("title", &request.title)?;
    require_card_access(&mut *pool.acquire().await?, card_id, user.user_id)
        .await?;

    let card = db::update_details(&pool, card_id, &title, request.due_date, request.is_archived)
        .await?
        .ok_or_else(|| BackendError::not_found("card"))?;
    Ok(Json(card))
}

/// Apply a batch of card order writes atomically
///
/// # Errors
///
/// * `400 Bad Request` - Body is not `{cards: [...]}`, the array is empty,
///   or an entry is malformed
/// * `404 Not Found` - An id matches no card; nothing is written
/// * `500 Internal Server Error` - A write failed; nothing is written
pub async fn reorder_cards(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    payload: Result<Json<ReorderCardsRequest>, JsonRejection>,
) -> Result<Json<ReorderResponse>, BackendError> {
    let Json(request) = payload?;
    let updated = apply_batch(&pool, OrderedTable::Cards, user.user_id, &request.cards).await?;
    Ok(Json(ReorderResponse { updated }))
}
