//! DTOs for the statistics endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::application::services::StatsSnapshot;
use crate::application::services::stats_service::DEFAULT_STATS_LIMIT;
use crate::domain::entities::ShortLink;

/// Query parameters for `GET /stats`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl StatsQuery {
    /// Requested limit, or the default of 10.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_STATS_LIMIT)
    }
}

/// One row of the statistics table.
#[derive(Debug, Serialize)]
pub struct LinkStatsItem {
    pub id: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkStatsItem {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            target_url: link.target_url,
            click_count: link.click_count,
            created_at: link.created_at,
        }
    }
}

/// Statistics response. `total` is the number of entries in `top_urls`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub top_urls: Vec<LinkStatsItem>,
    pub total: usize,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        let top_urls: Vec<LinkStatsItem> =
            snapshot.top_links.into_iter().map(Into::into).collect();

        Self {
            total: top_urls.len(),
            top_urls,
        }
    }
}
