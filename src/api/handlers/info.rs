//! Liveness probe and service description.

use axum::Json;

use crate::api::dto::info::{EndpointInfo, InfoResponse, PingResponse};

/// `GET /ping` (also answers `HEAD`).
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse { status: "ok" })
}

/// `GET /` with the service name, version, and public routes.
pub async fn info_handler() -> Json<InfoResponse> {
    let endpoint = |method: &'static str, path: &'static str, description: &'static str| {
        EndpointInfo {
            method,
            path,
            description,
        }
    };

    Json(InfoResponse {
        app: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            endpoint("POST", "/shorten", "Create a short link"),
            endpoint("GET", "/{short_id}", "Redirect to the target URL"),
            endpoint("GET", "/stats", "Most-clicked links (admin)"),
            endpoint("DELETE", "/delete_url", "Delete a short link (admin)"),
            endpoint("GET", "/ping", "Liveness probe"),
            endpoint("GET", "/health", "Store and click queue health"),
        ],
    })
}
