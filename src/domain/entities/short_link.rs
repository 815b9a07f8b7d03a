//! Short link entity representing an identifier-to-URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored mapping from a short identifier to its target URL.
///
/// The `id` is the primary key and never changes after creation. The
/// `click_count` only grows, and only through resolutions of this `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ShortLink {
    pub id: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: String,
        target_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            target_url,
            click_count,
            created_at,
        }
    }

    /// Builds the public short URL for this link under `base_url`.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.id)
    }
}

/// Input data for inserting a new link. The store sets `click_count = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub id: String,
    pub target_url: String,
}
