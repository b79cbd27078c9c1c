/**
 * Notification Database Operations
 */

use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::kanban::Notification;

/// Notifications of a user, newest first
pub async fn for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Notification>, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, user_id, message, is_read, created_at
        FROM notifications
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Mark one of the user's notifications read
///
/// Returns the number of rows touched: `0` when the notification does not
/// exist or belongs to someone else.
pub async fn mark_read(
    pool: &SqlitePool,
    notification_id: Uuid,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = $1 AND user_id = $2")
        .bind(notification_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Delete the user's read notifications
pub async fn clear_read(pool: &SqlitePool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM notifications WHERE user_id = $1 AND is_read = 1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
