/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 *
 * Unknown email and wrong password produce the same 401 response.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::server::state::AuthSettings;
use crate::shared::kanban::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `401 Unauthorized` - User not found or password incorrect
/// * `500 Internal Server Error` - Database, hashing or token failure
pub async fn login(
    State(pool): State<SqlitePool>,
    State(settings): State<Arc<AuthSettings>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    let email = request.email.trim();
    if email.is_empty() || request.password.is_empty() {
        return Err(BackendError::validation("Missing Credentials"));
    }

    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&pool, email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        BackendError::InvalidCredentials
    })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        BackendError::internal(e.to_string())
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", email);
        return Err(BackendError::InvalidCredentials);
    }

    let token = create_token(&settings, user.id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal(e.to_string())
    })?;

    tracing::info!("User logged in successfully: {}", user.id);
    Ok(Json(AuthResponse { token }))
}
