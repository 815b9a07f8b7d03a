//! DTOs for the delete endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for `DELETE /delete_url`.
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub short_id: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub id: String,
}
