/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the profile of the authenticated user, without
 * the password hash.
 */

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::kanban::UserResponse;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - No authenticated user on the request
/// * `404 Not Found` - The token names a user that no longer exists
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserResponse>, BackendError> {
    let record = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| BackendError::not_found("user"))?;
    Ok(Json(record.to_response()))
}
