/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that name, email and password are present
 * 2. Check the email syntax and the minimum password length
 * 3. Reject an email that is already registered (409)
 * 4. Hash the password with bcrypt and store the user
 * 5. Return a bearer token
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use sqlx::SqlitePool;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::backend::server::state::AuthSettings;
use crate::shared::kanban::{AuthResponse, RegisterRequest};
use crate::shared::validation::{is_valid_email, MIN_PASSWORD_LEN};

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, invalid email or short password
/// * `409 Conflict` - Email already registered
/// * `500 Internal Server Error` - Hashing, token or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Ada", "email": "ada@example.com", "password": "correct horse"}
/// ```
pub async fn register(
    State(pool): State<SqlitePool>,
    State(settings): State<Arc<AuthSettings>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;

    let name = request.name.trim();
    let email = request.email.trim();
    if name.is_empty() || email.is_empty() || request.password.is_empty() {
        return Err(BackendError::validation("Missing Credentials"));
    }
    if !is_valid_email(email) {
        return Err(BackendError::validation("Invalid Email"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(BackendError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    tracing::info!("Registration request for: {}", email);

    if get_user_by_email(&pool, email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = bcrypt::hash(&request.password, settings.bcrypt_cost).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::internal(e.to_string())
    })?;

    let user = create_user(&pool, name, email, &password_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                BackendError::conflict("User already exists")
            }
            other => BackendError::from(other),
        })?;

    let token = create_token(&settings, user.id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal(e.to_string())
    })?;

    tracing::info!("User registered: {}", user.id);
    Ok(Json(AuthResponse { token }))
}
