//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Service info (public)
//! - `GET  /ping`, `/health`  - Probes (public, not rate limited)
//! - `POST /shorten`          - Create a short link (`shorten` budget)
//! - `GET  /stats`            - Admin statistics (`admin` budget)
//! - `DELETE /delete_url`     - Admin delete (`admin` budget)
//! - `GET  /{short_id}`       - Redirect (`redirect` budget)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket per route group
//! - **Authentication** - Admin token on `/stats` and `/delete_url`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::RateLimits;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Fails if a rate-limit budget is zero.
pub fn app_router(state: AppState, rate_limits: RateLimits) -> anyhow::Result<NormalizePath<Router>> {
    let router = router(state, Some(rate_limits))?;

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

/// Builds the routes without path normalization.
///
/// `rate_limits = None` disables rate limiting, which needs the peer
/// address and is unavailable to in-process test clients.
///
/// # Errors
///
/// Fails if a rate-limit budget is zero.
pub fn router(state: AppState, rate_limits: Option<RateLimits>) -> anyhow::Result<Router> {
    let budget = |pick: fn(&RateLimits) -> u32| rate_limits.as_ref().map(pick);

    let shorten = limited(api::routes::shorten_routes(), budget(|l| l.shorten))?;
    let admin = limited(api::routes::admin_routes(state.clone()), budget(|l| l.admin))?;
    let redirect = limited(api::routes::redirect_routes(), budget(|l| l.redirect))?;

    Ok(Router::new()
        .merge(api::routes::public_routes())
        .merge(shorten)
        .merge(admin)
        .merge(redirect)
        .with_state(state)
        .layer(tracing::layer()))
}

fn limited(
    routes: Router<AppState>,
    per_minute: Option<u32>,
) -> anyhow::Result<Router<AppState>> {
    Ok(match per_minute {
        Some(n) => routes.layer(rate_limit::per_minute(n)?),
        None => routes,
    })
}
