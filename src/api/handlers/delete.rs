//! Handler for link deletion.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::delete::{DeleteQuery, DeleteResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /delete_url?short_id=abc1234` (admin credential required)
///
/// # Errors
///
/// Returns 400 Bad Request if `short_id` is blank.
/// Returns 404 Not Found if no link has this identifier.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = query.short_id.trim();

    if id.is_empty() {
        return Err(AppError::bad_request(
            "short_id is required",
            json!({ "field": "short_id" }),
        ));
    }

    state.link_service.delete_link(id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        id: id.to_string(),
    }))
}
