//! Fixtures for the backend unit tests: a migrated SQLite database in a
//! temporary directory plus seed helpers that bypass the HTTP layer.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use crate::backend::auth::users::{create_user, User};
use crate::backend::server::config::load_database;
use crate::backend::server::state::{AppState, AuthSettings};
use crate::shared::kanban::{Board, BoardRole, Card, List};

/// Fresh migrated database; keep the `TempDir` alive for the test's duration
pub async fn test_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}", dir.path().join("test.db").display());
    let pool = load_database(&url).await.expect("open test database");
    (dir, pool)
}

pub fn test_settings() -> Arc<AuthSettings> {
    Arc::new(AuthSettings {
        jwt_secret: "test-secret".to_string(),
        token_ttl_secs: 3600,
        bcrypt_cost: 4,
    })
}

pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        db_pool: pool,
        auth: test_settings(),
    }
}

pub async fn seed_user(pool: &SqlitePool, email: &str, password: &str) -> User {
    let hash = bcrypt::hash(password, 4).expect("hash password");
    let name = email.split('@').next().unwrap_or(email);
    create_user(pool, name, email, &hash).await.expect("seed user")
}

pub async fn seed_board(pool: &SqlitePool, owner_id: Uuid, title: &str) -> Board {
    crate::backend::boards::db::create_board(pool, title, owner_id)
        .await
        .expect("seed board")
}

pub async fn seed_member(pool: &SqlitePool, board_id: Uuid, user_id: Uuid, role: BoardRole) {
    sqlx::query("INSERT INTO board_members (board_id, user_id, role, joined_at) VALUES ($1, $2, $3, $4)")
        .bind(board_id)
        .bind(user_id)
        .bind(role)
        .bind(Utc::now())
        .execute(pool)
        .await
        .expect("seed member");
}

/// List with an explicit order key
pub async fn seed_list(pool: &SqlitePool, board_id: Uuid, title: &str, order: i64) -> List {
    sqlx::query_as::<_, List>(
        r#"
        INSERT INTO lists (id, title, board_id, "order", created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, board_id, "order", created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(board_id)
    .bind(order)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .expect("seed list")
}

/// Card with an explicit order key
pub async fn seed_card(pool: &SqlitePool, list_id: Uuid, title: &str, order: i64) -> Card {
    sqlx::query_as::<_, Card>(
        r#"
        INSERT INTO cards (id, title, list_id, "order", due_date, is_archived, created_at)
        VALUES ($1, $2, $3, $4, NULL, 0, $5)
        RETURNING id, title, list_id, "order", due_date, is_archived, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(list_id)
    .bind(order)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .expect("seed card")
}
