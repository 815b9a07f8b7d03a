//! API route groups.
//!
//! Each group carries its own rate-limit budget; see [`crate::routes`].

use crate::api::handlers::{
    delete_handler, health_handler, info_handler, ping_handler, redirect_handler,
    shorten_handler, stats_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

/// Unlimited, unauthenticated routes.
///
/// - `GET  /`       - Service info
/// - `GET  /ping`   - Liveness probe (`HEAD` too)
/// - `GET  /health` - Store and click queue checks
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(info_handler))
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
}

/// `POST /shorten`
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// `GET /{short_id}`
pub fn redirect_routes() -> Router<AppState> {
    Router::new().route("/{short_id}", get(redirect_handler))
}

/// Admin routes, protected by [`auth::layer`].
///
/// - `GET    /stats`      - Most-clicked links
/// - `DELETE /delete_url` - Delete a link by `short_id`
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_handler))
        .route("/delete_url", delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state, auth::layer))
}
