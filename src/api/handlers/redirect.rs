//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short identifier to its target URL.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// # Request Flow
///
/// 1. Look the identifier up in the store
/// 2. Queue a click event for the background worker (never awaited)
/// 3. Return 307 Temporary Redirect
///
/// # Errors
///
/// Unknown identifiers answer 404 Not Found, or a temporary redirect to
/// `NOT_FOUND_REDIRECT` when one is configured.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve_link(&short_id).await {
        Ok(target_url) => Ok(Redirect::temporary(&target_url).into_response()),
        Err(err @ AppError::NotFound { .. }) => match state.not_found_redirect.as_deref() {
            Some(fallback) => {
                debug!(short_id = %short_id, "Unknown short id, using fallback redirect");
                Ok(Redirect::temporary(fallback).into_response())
            }
            None => Err(err),
        },
        Err(e) => Err(e),
    }
}
