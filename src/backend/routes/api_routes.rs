/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Current user (protected)
 *
 * ## Boards (protected)
 * - `POST /api/boards`, `GET /api/boards`
 * - `GET /api/boards/{id}`, `POST /api/boards/{id}/invite`
 *
 * ## Lists (protected)
 * - `POST /api/lists`, `GET /api/lists/{board_id}`, `PATCH /api/lists/reorder`
 *
 * ## Cards (protected)
 * - `POST /api/cards`, `GET /api/cards/{list_id}`, `PUT /api/cards/{id}`
 * - `PUT /api/cards/{id}/details`, `PATCH /api/cards/reorder`
 *
 * ## Notifications (protected)
 * - `GET /api/notifications`, `PUT /api/notifications/{id}`
 * - `DELETE /api/notifications/clear`
 *
 * `GET /api/cards/{id}` takes a list id while `PUT` on the same path takes
 * a card id; axum requires one parameter name per path segment.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::boards::{create_board, get_board, invite_member, list_boards};
use crate::backend::cards::{create_card, get_cards, move_card, reorder_cards, update_card_details};
use crate::backend::lists::{create_list, get_lists, reorder_lists};
use crate::backend::middleware::auth_middleware;
use crate::backend::notifications::{clear_read, list_notifications, mark_read};
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes behind `auth_middleware`
///
/// Requests without a valid token are answered with 401 before any handler
/// runs.
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        // Boards
        .route("/api/boards", post(create_board).get(list_boards))
        .route("/api/boards/{id}", get(get_board))
        .route("/api/boards/{id}/invite", post(invite_member))
        // Lists
        .route("/api/lists", post(create_list))
        .route("/api/lists/reorder", patch(reorder_lists))
        .route("/api/lists/{id}", get(get_lists))
        // Cards
        .route("/api/cards", post(create_card))
        .route("/api/cards/reorder", patch(reorder_cards))
        .route("/api/cards/{id}", get(get_cards).put(move_card))
        .route("/api/cards/{id}/details", put(update_card_details))
        // Notifications
        .route("/api/notifications", get(list_notifications))
        .route("/api/notifications/clear", axum::routing::delete(clear_read))
        .route("/api/notifications/{id}", put(mark_read))
        .route_layer(from_fn_with_state(app_state, auth_middleware))
}

/// Add every API route to `router`
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .merge(public_routes())
        .merge(protected_routes(app_state))
}
