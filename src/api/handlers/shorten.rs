//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "target_url": "example.com/some/long/path",
///   "custom_id": "My Link"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": "my-link",
///   "target_url": "https://example.com/some/long/path",
///   "short_url": "http://localhost:3000/my-link"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid, the alias is
/// reserved, or the alias is already taken (`conflict`).
/// Returns 500 Internal Server Error on storage failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let created = state
        .link_service
        .create_link(&payload.target_url, payload.custom_id.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
