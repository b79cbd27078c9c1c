/**
 * List Database Operations
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::kanban::List;
use crate::shared::position::next_order;

/// Append a list to the end of a board
///
/// The max lookup and the insert share a transaction so the new list is
/// placed after every list visible to that transaction.
pub async fn create_list(
    pool: &SqlitePool,
    title: &str,
    board_id: Uuid,
) -> Result<List, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let current_max: Option<i64> =
        sqlx::query_scalar(r#"SELECT MAX("order") FROM lists WHERE board_id = $1"#)
            .bind(board_id)
            .fetch_one(&mut *tx)
            .await?;

    let list = sqlx::query_as::<_, List>(
        r#"
        INSERT INTO lists (id, title, board_id, "order", created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, board_id, "order", created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(board_id)
    .bind(next_order(current_max))
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(list)
}

/// Lists of a board in display order
pub async fn lists_for_board(pool: &SqlitePool, board_id: Uuid) -> Result<Vec<List>, sqlx::Error> {
    sqlx::query_as::<_, List>(
        r#"
        SELECT id, title, board_id, "order", created_at
        FROM lists
        WHERE board_id = $1
        ORDER BY "order" ASC, id ASC
        "#,
    )
    .bind(board_id)
    .fetch_all(pool)
    .await
}
