//! DTOs for the liveness and service info endpoints.

use serde::Serialize;

/// Liveness probe body.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
}

/// Service description returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}
