/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation, and route configuration.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Build the application state from configuration
///
/// Opens the database (creating and migrating it as needed) and wraps it
/// with the auth settings.
pub async fn build_state(config: &ServerConfig) -> Result<AppState, sqlx::Error> {
    let db_pool = load_database(&config.database_url).await?;
    Ok(AppState::new(db_pool, config.auth.clone()))
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing kanflow backend server");

    let state = build_state(config).await?;
    let app = create_router(state);

    tracing::info!("Router configured");
    Ok(app)
}
