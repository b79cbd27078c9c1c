/**
 * Notification Handlers
 *
 * - `GET /api/notifications` - Caller's inbox, newest first
 * - `PUT /api/notifications/{id}` - Mark one read
 * - `DELETE /api/notifications/clear` - Delete every read notification
 */

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::notifications::db;
use crate::shared::kanban::{Notification, NotificationAck};

pub async fn list_notifications(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Notification>>, BackendError> {
    Ok(Json(db::for_user(&pool, user.user_id).await?))
}

/// Mark a notification read; `404` unless it belongs to the caller
pub async fn mark_read(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<NotificationAck>, BackendError> {
    let Path(notification_id) = path?;
    let affected = db::mark_read(&pool, notification_id, user.user_id).await?;
    if affected == 0 {
        return Err(BackendError::not_found("notification"));
    }
    Ok(Json(NotificationAck {
        message: "Notification marked as read".to_string(),
        affected,
    }))
}

pub async fn clear_read(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<NotificationAck>, BackendError> {
    let affected = db::clear_read(&pool, user.user_id).await?;
    tracing::debug!("Cleared {} read notifications for {}", affected, user.user_id);
    Ok(Json(NotificationAck {
        message: "Cleared read notifications".to_string(),
        affected,
    }))
}
