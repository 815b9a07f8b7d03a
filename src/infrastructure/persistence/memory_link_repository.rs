//! In-process implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store held in memory.
///
/// Used for local runs (`STORAGE_BACKEND=memory`) and integration tests.
/// Every mutation takes the write lock, so insert-if-absent and increments
/// are atomic. Data is lost when the process exits.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn exists(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.links.read().await.contains_key(id))
    }

    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.id) {
            return Err(AppError::conflict(
                "Alias already exists",
                json!({ "id": new_link.id }),
            ));
        }

        let link = ShortLink::new(new_link.id, new_link.target_url, 0, Utc::now());
        links.insert(link.id.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.read().await.get(id).cloned())
    }

    async fn increment_clicks(&self, id: &str) -> Result<bool, AppError> {
        match self.links.write().await.get_mut(id) {
            Some(link) => {
                link.click_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(id).is_some())
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.read().await;

        let mut sorted: Vec<ShortLink> = links.values().cloned().collect();
        sorted.sort_by(|a, b| {
            (Reverse(a.click_count), &a.id).cmp(&(Reverse(b.click_count), &b.id))
        });
        sorted.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(sorted)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.read().await.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(id: &str) -> NewShortLink {
        NewShortLink {
            id: id.to_string(),
            target_url: format!("https://example.com/{id}"),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryLinkRepository::new();

        let link = repo.insert(new_link("cafe")).await.unwrap();
        assert_eq!(link.click_count, 0);

        let found = repo.find_by_id("cafe").await.unwrap().unwrap();
        assert_eq!(found, link);
        assert!(repo.exists("cafe").await.unwrap());
        assert!(!repo.exists("other").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_conflict() {
        let repo = MemoryLinkRepository::new();
        repo.insert(new_link("taken")).await.unwrap();

        let err = repo.insert(new_link("taken")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_increment_and_delete() {
        let repo = MemoryLinkRepository::new();
        repo.insert(new_link("hits")).await.unwrap();

        assert!(repo.increment_clicks("hits").await.unwrap());
        assert!(repo.increment_clicks("hits").await.unwrap());
        assert!(!repo.increment_clicks("missing").await.unwrap());
        assert_eq!(repo.find_by_id("hits").await.unwrap().unwrap().click_count, 2);

        assert!(repo.delete("hits").await.unwrap());
        assert!(!repo.delete("hits").await.unwrap());
        assert!(repo.find_by_id("hits").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_top_by_clicks_order_and_limit() {
        let repo = MemoryLinkRepository::new();
        for (id, clicks) in [("bb", 3), ("aa", 3), ("cc", 7), ("dd", 0)] {
            repo.insert(new_link(id)).await.unwrap();
            for _ in 0..clicks {
                repo.increment_clicks(id).await.unwrap();
            }
        }

        let top = repo.top_by_clicks(3).await.unwrap();
        let ids: Vec<&str> = top.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["cc", "aa", "bb"]);

        assert!(repo.top_by_clicks(0).await.unwrap().is_empty());
        assert_eq!(repo.top_by_clicks(100).await.unwrap().len(), 4);
    }
}
