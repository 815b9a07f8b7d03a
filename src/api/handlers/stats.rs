//! Handler for click statistics.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::stats::{StatsQuery, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the most-clicked links.
///
/// # Endpoint
///
/// `GET /stats?limit=10` (admin credential required)
///
/// # Response
///
/// ```json
/// {
///   "top_urls": [
///     {
///       "id": "abc1234",
///       "target_url": "https://example.com",
///       "click_count": 42,
///       "created_at": "2025-01-01T12:00:00Z"
///     }
///   ],
///   "total": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` is outside 1..=1000.
pub async fn stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let snapshot = state.stats_service.top_links(query.limit()).await?;

    Ok(Json(snapshot.into()))
}
