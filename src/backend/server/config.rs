/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (after `.env` has been
 * loaded by the binary), with defaults suited to local development:
 *
 * | Variable         | Default               |
 * |------------------|-----------------------|
 * | `DATABASE_URL`   | `sqlite://kanflow.db` |
 * | `SERVER_PORT`    | `5000`                |
 * | `JWT_SECRET`     | required in release   |
 * | `TOKEN_TTL_SECS` | `3600`                |
 * | `BCRYPT_COST`    | `bcrypt::DEFAULT_COST`|
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::server::state::AuthSettings;
use crate::shared::ConfigError;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite://kanflow.db";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default token lifetime, one hour
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

const DEV_JWT_SECRET: &str = "kanflow-development-secret";

const MAX_CONNECTIONS: u32 = 8;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// sqlx connection URL, e.g. `sqlite://kanflow.db`
    pub database_url: String,
    /// TCP port to listen on
    pub port: u16,
    /// Token and password hashing settings
    pub auth: AuthSettings,
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingValue` - `JWT_SECRET` is unset in a release build
    /// * `ConfigError::InvalidValue` - a numeric variable does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = parse_var(&lookup, "SERVER_PORT")?.unwrap_or(DEFAULT_PORT);
        let token_ttl_secs =
            parse_var(&lookup, "TOKEN_TTL_SECS")?.unwrap_or(DEFAULT_TOKEN_TTL_SECS);
        let bcrypt_cost = parse_var(&lookup, "BCRYPT_COST")?.unwrap_or(bcrypt::DEFAULT_COST);

        let jwt_secret = match lookup("JWT_SECRET").filter(|secret| !secret.is_empty()) {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::MissingValue("JWT_SECRET")),
        };

        Ok(Self {
            database_url,
            port,
            auth: AuthSettings {
                jwt_secret,
                token_ttl_secs,
                bcrypt_cost,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Open the SQLite connection pool and apply migrations
///
/// The database file is created when missing and foreign keys are enforced
/// on every connection.
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the URL is malformed, the
/// connection cannot be opened, or a migration fails.
///
/// # Example
///
/// ```rust,no_run
/// use kanflow::backend::server::config::load_database;
///
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = load_database("sqlite://kanflow.db").await?;
/// # let _ = pool;
/// # Ok(())
/// # }
/// ```
pub async fn load_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database ready");

    Ok(pool)
}
