//! Per-route rate limiting using the token bucket algorithm.

use anyhow::anyhow;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP limiter allowing `per_minute` requests per minute.
///
/// # Limits
///
/// - **Rate**: one token every `60_000 / per_minute` milliseconds
/// - **Burst**: `per_minute` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Fails if `per_minute` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::per_minute(20)?);
/// ```
pub fn per_minute(per_minute: u32) -> anyhow::Result<RateLimitLayer> {
    if per_minute == 0 {
        return Err(anyhow!("Rate limit must allow at least one request per minute"));
    }

    let replenish_ms = (60_000 / u64::from(per_minute)).max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(per_minute)
        .finish()
        .ok_or_else(|| anyhow!("Invalid rate limit configuration: {per_minute}/min"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
