/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * 1. `TraceLayer` - one `http_request` span per request
 * 2. `CorsLayer` - permissive
 *
 * # Fallback
 *
 * Unknown routes return a JSON 404.
 */

use axum::{extract::State, http::Request, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check: verifies the store answers a trivial query
async fn health(State(pool): State<SqlitePool>) -> Result<Json<HealthResponse>, BackendError> {
    sqlx::query("SELECT 1").execute(&pool).await?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> BackendError {
    BackendError::not_found("route")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool and auth settings
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO))
        .on_failure(DefaultOnFailure::new().level(Level::ERROR));

    let router = Router::new().route("/api/health", get(health));
    let router = configure_api_routes(router, app_state.clone());

    router
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(app_state)
}
