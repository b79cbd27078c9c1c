/**
 * Board Access Checks
 *
 * Every list and card belongs to exactly one board; a user may act on it
 * when they own that board or hold a membership on it.
 *
 * The checks take a plain connection: handlers pass a pooled connection and
 * batch writes pass their open transaction.
 *
 * | Situation                         | Result           |
 * |-----------------------------------|------------------|
 * | board / list / card does not exist| 404 Not Found    |
 * | caller is owner                   | `BoardRole::Owner` |
 * | caller is a member                | the member role  |
 * | otherwise                         | 403 Forbidden    |
 */

use sqlx::SqliteConnection;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::kanban::BoardRole;

async fn role_on_board(
    conn: &mut SqliteConnection,
    board_id: Uuid,
    user_id: Uuid,
) -> Result<BoardRole, BackendError> {
    let row: Option<(Uuid, Option<BoardRole>)> = sqlx::query_as(
        r#"
        SELECT b.owner_id, bm.role
        FROM boards b
        LEFT JOIN board_members bm ON bm.board_id = b.id AND bm.user_id = $2
        WHERE b.id = $1
        "#,
    )
    .bind(board_id)
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;

    match row {
        None => Err(BackendError::not_found("board")),
        Some((owner_id, _)) if owner_id == user_id => Ok(BoardRole::Owner),
        Some((_, Some(role))) => Ok(role),
        Some((_, None)) => {
            tracing::warn!("User {} has no access to board {}", user_id, board_id);
            Err(BackendError::forbidden("Not Authorized"))
        }
    }
}

/// Role of `user_id` on `board_id`
pub async fn require_board_access(
    conn: &mut SqliteConnection,
    board_id: Uuid,
    user_id: Uuid,
) -> Result<BoardRole, BackendError> {
    role_on_board(conn, board_id, user_id).await
}

/// Board of `list_id`, after checking that `user_id` may access it
pub async fn require_list_access(
    conn: &mut SqliteConnection,
    list_id: Uuid,
    user_id: Uuid,
) -> Result<Uuid, BackendError> {
    let board_id: Option<Uuid> = sqlx::query_scalar("SELECT board_id FROM lists WHERE id = $1")
        .bind(list_id)
        .fetch_optional(&mut *conn)
        .await?;
    let board_id = board_id.ok_or_else(|| BackendError::not_found("list"))?;
    role_on_board(&mut *conn, board_id, user_id).await?;
    Ok(board_id)
}

/// Board of `card_id`, after checking that `user_id` may access it
pub async fn require_card_access(
    conn: &mut SqliteConnection,
    card_id: Uuid,
    user_id: Uuid,
) -> Result<Uuid, BackendError> {
    let board_id: Option<Uuid> = sqlx::query_scalar(
        "SELECT l.board_id FROM cards c JOIN lists l ON l.id = c.list_id WHERE c.id = $1",
    )
    .bind(card_id)
    .fetch_optional(&mut *conn)
    .await?;
    let board_id = board_id.ok_or_else(|| BackendError::not_found("card"))?;
    role_on_board(&mut *conn, board_id, user_id).await?;
    Ok(board_id)
}
