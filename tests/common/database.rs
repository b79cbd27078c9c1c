//! Database test fixtures and utilities
//!
//! Every fixture gets its own SQLite file in a temporary directory, so
//! tests stay isolated without cleanup.

use sqlx::SqlitePool;
use tempfile::TempDir;
use uuid::Uuid;

use kanflow::backend::server::config::load_database;
use kanflow::backend::server::{AppState, AuthSettings};

/// Auth settings used by every fixture
pub fn test_auth_settings() -> AuthSettings {
    AuthSettings {
        jwt_secret: "integration-secret".to_string(),
        token_ttl_secs: 3600,
        bcrypt_cost: 4,
    }
}

/// Test database fixture
///
/// The database file is removed when the fixture is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create and migrate a fresh database
    pub async fn new() -> Self {
        super::init_tracing();
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("kanflow.db").display());
        let pool = load_database(&url)
            .await
            .expect("Failed to open test database");
        Self { _dir: dir, pool }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Application state over this database
    pub fn state(&self) -> AppState {
        AppState::new(self.pool.clone(), test_auth_settings())
    }

    /// Stored `(id, order)` of every card in a list, archived included,
    /// in display order
    pub async fn card_orders(&self, list_id: Uuid) -> Vec<(Uuid, i64)> {
        sqlx::query_as::<_, (Uuid, i64)>(
            r#"SELECT id, "order" FROM cards WHERE list_id = $1 ORDER BY "order" ASC, id ASC"#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .expect("Failed to read card orders")
    }

    /// Stored order of one card
    pub async fn card_order(&self, card_id: Uuid) -> i64 {
        sqlx::query_scalar::<_, i64>(r#"SELECT "order" FROM cards WHERE id = $1"#)
            .bind(card_id)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to read card order")
    }

    /// Stored order of one list
    pub async fn list_order(&self, list_id: Uuid) -> i64 {
        sqlx::query_scalar::<_, i64>(r#"SELECT "order" FROM lists WHERE id = $1"#)
            .bind(list_id)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to read list order")
    }

    /// Number of rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
