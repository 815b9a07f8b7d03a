//! Background worker that applies click increments.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Number of retries after the first failed increment.
const MAX_RETRIES: usize = 3;

/// Drains the click queue until every sender is dropped.
///
/// At most `concurrency` increments are in flight at once. Each increment is
/// retried with exponential backoff; a final failure is logged and the click
/// is lost.
pub async fn run_click_worker<R>(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<R>,
    concurrency: usize,
) where
    R: LinkRepository + ?Sized + 'static,
{
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let repository = repository.clone();

        tasks.spawn(async move {
            let _permit = permit;
            process_click(repository.as_ref(), &event).await;
        });

        // Reap finished tasks so the set does not grow unbounded.
        while tasks.try_join_next().is_some() {}
    }

    while tasks.join_next().await.is_some() {}
    info!("Click worker stopped");
}

/// Applies a single click increment with retry.
///
/// Returns `true` if the counter was incremented.
pub async fn process_click<R>(repository: &R, event: &ClickEvent) -> bool
where
    R: LinkRepository + ?Sized,
{
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_RETRIES);

    let result: Result<bool, AppError> =
        Retry::start(strategy, || repository.increment_clicks(&event.id)).await;

    match result {
        Ok(true) => {
            debug!(id = %event.id, "Click recorded");
            true
        }
        Ok(false) => {
            warn!(id = %event.id, "Click for a link that no longer exists");
            false
        }
        Err(e) => {
            error!(id = %event.id, error = %e, "Failed to record click");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_process_click_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_clicks()
            .withf(|id| id == "abc1234")
            .times(1)
            .returning(|_| Ok(true));

        assert!(process_click(&mock_repo, &ClickEvent::new("abc1234")).await);
    }

    #[tokio::test]
    async fn test_process_click_retries_then_succeeds() {
        let mut mock_repo = MockLinkRepository::new();
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();

        mock_repo
            .expect_increment_clicks()
            .times(2)
            .returning(move |_| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(AppError::internal("Database error", json!({})))
                } else {
                    Ok(true)
                }
            });

        assert!(process_click(&mock_repo, &ClickEvent::new("abc1234")).await);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_process_click_gives_up_after_retries() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_clicks()
            .times(MAX_RETRIES + 1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        assert!(!process_click(&mock_repo, &ClickEvent::new("abc1234")).await);
    }

    #[tokio::test]
    async fn test_process_click_missing_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(false));

        assert!(!process_click(&mock_repo, &ClickEvent::new("gone")).await);
    }

    #[tokio::test]
    async fn test_worker_drains_queue_and_stops() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_increment_clicks()
            .times(3)
            .returning(|_| Ok(true));

        let (tx, rx) = mpsc::channel(10);
        for id in ["a1", "b2", "c3"] {
            tx.send(ClickEvent::new(id)).await.unwrap();
        }
        drop(tx);

        run_click_worker(rx, Arc::new(mock_repo), 2).await;
    }
}
