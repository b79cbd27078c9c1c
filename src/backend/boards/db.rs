/**
 * Board Database Operations
 *
 * Boards, their membership records, and the invitation write that pairs a
 * new membership with an inbox notification.
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::kanban::{Board, BoardMember, BoardRole, SharedBoard};

/// Create a board owned by `owner_id`
pub async fn create_board(
    pool: &SqlitePool,
    title: &str,
    owner_id: Uuid,
) -> Result<Board, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        INSERT INTO boards (id, title, owner_id, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, owner_id, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(owner_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Get a board by id
pub async fn get_board(pool: &SqlitePool, board_id: Uuid) -> Result<Option<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>("SELECT id, title, owner_id, created_at FROM boards WHERE id = $1")
        .bind(board_id)
        .fetch_optional(pool)
        .await
}

/// Boards owned by the user, newest first
pub async fn owned_boards(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        SELECT id, title, owner_id, created_at
        FROM boards
        WHERE owner_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Boards shared with the user, most recently joined first
pub async fn shared_boards(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<SharedBoard>, sqlx::Error> {
    sqlx::query_as::<_, SharedBoard>(
        r#"
        SELECT b.id, b.title, b.owner_id, b.created_at, bm.role
        FROM boards b
        JOIN board_members bm ON bm.board_id = b.id
        WHERE bm.user_id = $1
        ORDER BY bm.joined_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Whether `user_id` already holds a membership on the board
pub async fn is_member(pool: &SqlitePool, board_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM board_members WHERE board_id = $1 AND user_id = $2",
    )
    .bind(board_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

/// Insert a membership and the invitee's notification in one transaction
///
/// Either both rows are written or neither is.
pub async fn add_member_with_notification(
    pool: &SqlitePool,
    board_id: Uuid,
    user_id: Uuid,
    role: BoardRole,
    message: &str,
) -> Result<BoardMember, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let member = sqlx::query_as::<_, BoardMember>(
        r#"
        INSERT INTO board_members (board_id, user_id, role, joined_at)
        VALUES ($1, $2, $3, $4)
        RETURNING board_id, user_id, role, joined_at
        "#,
    )
    .bind(board_id)
    .bind(user_id)
    .bind(role)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO notifications (id, user_id, message, is_read, created_at)
        VALUES ($1, $2, $3, 0, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(message)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(member)
}
