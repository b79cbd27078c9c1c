/**
 * Card Database Operations
 *
 * Archived cards stay in the table with their order; they are filtered out
 * of default retrieval but still count when computing the append position.
 */

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::kanban::Card;
use crate::shared::position::next_order;

const CARD_COLUMNS: &str = r#"id, title, list_id, "order", due_date, is_archived, created_at"#;

/// Append a card to the end of a list
pub async fn create_card(
    pool: &SqlitePool,
    title: &str,
    list_id: Uuid,
) -> Result<Card, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let current_max: Option<i64> =
        sqlx::query_scalar(r#"SELECT MAX("order") FROM cards WHERE list_id = $1"#)
            .bind(list_id)
            .fetch_one(&mut *tx)
            .await?;

    let card = sqlx::query_as::<_, Card>(&format!(
        r#"
        INSERT INTO cards (id, title, list_id, "order", due_date, is_archived, created_at)
        VALUES ($1, $2, $3, $4, NULL, 0, $5)
        RETURNING {}
        "#,
        CARD_COLUMNS
    ))
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(list_id)
    .bind(next_order(current_max))
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(card)
}

/// Non-archived cards of a list in display order
pub async fn active_cards(pool: &SqlitePool, list_id: Uuid) -> Result<Vec<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!(
        r#"
        SELECT {}
        FROM cards
        WHERE list_id = $1 AND is_archived = 0
        ORDER BY "order" ASC, id ASC
        "#,
        CARD_COLUMNS
    ))
    .bind(list_id)
    .fetch_all(pool)
    .await
}

/// Get a card by id, archived or not
pub async fn get_card(pool: &SqlitePool, card_id: Uuid) -> Result<Option<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!("SELECT {} FROM cards WHERE id = $1", CARD_COLUMNS))
        .bind(card_id)
        .fetch_optional(pool)
        .await
}

/// Set a card's list and order in one statement
///
/// Returns `None` when the card does not exist.
pub async fn move_card(
    pool: &SqlitePool,
    card_id: Uuid,
    list_id: Uuid,
    order: i64,
) -> Result<Option<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!(
        r#"UPDATE cards SET list_id = $1, "order" = $2 WHERE id = $3 RETURNING {}"#,
        CARD_COLUMNS
    ))
    .bind(list_id)
    .bind(order)
    .bind(card_id)
    .fetch_optional(pool)
    .await
}

/// Overwrite title, due date and archive flag
pub async fn update_details(
    pool: &SqlitePool,
    card_id: Uuid,
    title: &str,
    due_date: Option<NaiveDate>,
    is_archived: bool,
) -> Result<Option<Card>, sqlx::Error> {
    sqlx::query_as::<_, Card>(&format!(
        r#"UPDATE cards SET title = $1, due_date = $2, is_archived = $3 WHERE id = $4 RETURNING {}"#,
        CARD_COLUMNS
    ))
    .bind(title)
    .bind(due_date)
    .bind(is_archived)
    .bind(card_id)
    .fetch_optional(pool)
    .await
}
