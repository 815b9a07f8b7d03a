//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Largest page the statistics endpoint will return.
pub const MAX_STATS_LIMIT: i64 = 1000;

/// Default page size for statistics.
pub const DEFAULT_STATS_LIMIT: i64 = 10;

/// Most-clicked links plus the number of links in the store.
#[derive(Debug, Clone)]
pub struct StatsSnapshot {
    pub top_links: Vec<ShortLink>,
    pub stored_links: i64,
}

/// Read-only view over link click counts.
pub struct StatsService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> StatsService<L> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Returns up to `limit` links ordered by click count (highest first,
    /// ties by identifier) and the stored link count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is outside
    /// `1..=`[`MAX_STATS_LIMIT`].
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn top_links(&self, limit: i64) -> Result<StatsSnapshot, AppError> {
        if !(1..=MAX_STATS_LIMIT).contains(&limit) {
            return Err(AppError::bad_request(
                "Invalid limit",
                json!({ "limit": limit, "min": 1, "max": MAX_STATS_LIMIT }),
            ));
        }

        let top_links = self.repository.top_by_clicks(limit).await?;
        let stored_links = self.repository.count().await?;

        Ok(StatsSnapshot {
            top_links,
            stored_links,
        })
    }
}
