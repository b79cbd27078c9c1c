/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The SQLite connection pool, the single authoritative store
 * - Token and password hashing settings
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`.
 *
 * # Example
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     let _ = pool;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Token signing and password hashing settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Lifetime of an issued token in seconds
    pub token_ttl_secs: u64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Auth settings
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, auth: AuthSettings) -> Self {
        Self {
            db_pool,
            auth: Arc::new(auth),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AuthSettings> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
