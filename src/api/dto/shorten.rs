//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CreatedLink;
use crate::utils::url_normalizer::MAX_URL_LENGTH;

/// Upper bound for `target_url` as the validator expects it.
const MAX_TARGET_URL_LEN: u64 = MAX_URL_LENGTH as u64;

/// Request to shorten a URL.
///
/// `custom_id` is checked only for raw length here; sanitization and the
/// alias rules run in the service.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// Target URL. Scheme-less input is prefixed with `https://`.
    #[validate(length(min = 1, max = MAX_TARGET_URL_LEN, message = "URL must be 1-2048 characters"))]
    pub target_url: String,

    /// Optional custom alias. Blank values are treated as absent.
    #[serde(default)]
    #[validate(length(max = 200, message = "Custom alias is too long"))]
    pub custom_id: Option<String>,
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: String,
    pub target_url: String,
    pub short_url: String,
}

impl From<CreatedLink> for ShortenResponse {
    fn from(created: CreatedLink) -> Self {
        Self {
            id: created.link.id,
            target_url: created.link.target_url,
            short_url: created.short_url,
        }
    }
}
