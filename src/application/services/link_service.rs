//! Short link creation, resolution, and deletion.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, info, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::alias::{sanitize_alias, validate_alias};
use crate::utils::code_generator::generate_code;
use crate::utils::reserved_words::ReservedWords;
use crate::utils::url_normalizer::normalize_url;

/// Upper bound on generate-and-insert attempts for random codes.
pub const MAX_GENERATION_ATTEMPTS: usize = 20;

/// A freshly created link together with its public URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub link: ShortLink,
    pub short_url: String,
}

/// Orchestrates identifier allocation and link resolution.
///
/// Holds no link data between calls; every operation goes to the repository.
/// Click counting is handed to the background worker through `click_sender`
/// so that resolution never waits on the counter write.
pub struct LinkService<L: LinkRepository + ?Sized> {
    repository: Arc<L>,
    reserved: Arc<ReservedWords>,
    base_url: String,
    click_sender: mpsc::Sender<ClickEvent>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(
        repository: Arc<L>,
        reserved: Arc<ReservedWords>,
        base_url: impl Into<String>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            repository,
            reserved,
            base_url: base_url.into(),
            click_sender,
        }
    }

    /// Creates a short link.
    ///
    /// # Flow
    ///
    /// 1. Normalize the target URL (scheme-less input gets `https://`)
    /// 2. With a custom alias: sanitize, validate, check reserved words, check
    ///    existence, insert
    /// 3. Without one: generate random codes until one inserts cleanly
    ///
    /// A blank `custom_alias` is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is invalid, the alias fails
    /// validation, or the alias is reserved.
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken, including
    /// when a concurrent request wins the insert.
    ///
    /// Returns [`AppError::Internal`] on storage errors or when
    /// [`MAX_GENERATION_ATTEMPTS`] codes all collide.
    pub async fn create_link(
        &self,
        target_url: &str,
        custom_alias: Option<&str>,
    ) -> Result<CreatedLink, AppError> {
        let target_url = normalize_url(target_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let link = match custom_alias.filter(|a| !a.trim().is_empty()) {
            Some(raw) => self.insert_custom(raw, target_url).await?,
            None => self.insert_generated(target_url).await?,
        };

        info!(id = %link.id, target_url = %link.target_url, "Short link created");

        let short_url = link.short_url(&self.base_url);
        Ok(CreatedLink { link, short_url })
    }

    /// Resolves an identifier to its target URL and schedules a click.
    ///
    /// The click is queued, not awaited; when the queue is full the click is
    /// dropped and counted in `clicks_dropped_total`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_link(&self, id: &str) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "id": id })))?;

        metrics::counter!("redirects_total").increment(1);

        match self.click_sender.try_send(ClickEvent::new(link.id.as_str())) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                warn!(id = %event.id, "Click queue full, dropping click");
            }
            Err(TrySendError::Closed(event)) => {
                metrics::counter!("clicks_dropped_total").increment(1);
                error!(id = %event.id, "Click queue closed, dropping click");
            }
        }

        Ok(link.target_url)
    }

    /// Deletes a short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this identifier.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_link(&self, id: &str) -> Result<(), AppError> {
        let not_found = || AppError::not_found("Short link not found", json!({ "id": id }));

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found());
        }

        // A concurrent delete can win between lookup and delete.
        if !self.repository.delete(id).await? {
            return Err(not_found());
        }

        metrics::counter!("links_deleted_total").increment(1);
        info!(id, "Short link deleted");

        Ok(())
    }

    /// Round-trips to the store.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Returns whether the click queue still has a live worker.
    pub fn click_queue_open(&self) -> bool {
        !self.click_sender.is_closed()
    }

    /// Free slots in the click queue.
    pub fn click_queue_capacity(&self) -> usize {
        self.click_sender.capacity()
    }

    async fn insert_custom(&self, raw: &str, target_url: String) -> Result<ShortLink, AppError> {
        let id = sanitize_alias(raw);

        validate_alias(&id).map_err(|reason| {
            AppError::bad_request(
                format!("Invalid custom alias: {reason}"),
                json!({ "reason": reason.to_string(), "alias": id }),
            )
        })?;

        if self.reserved.contains(&id) {
            return Err(AppError::bad_request(
                "This alias is reserved for system use",
                json!({ "alias": id }),
            ));
        }

        let already_exists =
            || AppError::conflict("Alias already exists", json!({ "alias": id }));

        if self.repository.exists(&id).await? {
            return Err(already_exists());
        }

        let new_link = NewShortLink {
            id: id.clone(),
            target_url,
        };

        match self.repository.insert(new_link).await {
            Ok(link) => {
                metrics::counter!("links_created_total", "kind" => "custom").increment(1);
                Ok(link)
            }
            Err(AppError::Conflict { .. }) => Err(already_exists()),
            Err(e) => Err(e),
        }
    }

    async fn insert_generated(&self, target_url: String) -> Result<ShortLink, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.reserved.contains(&code) {
                debug!(code = %code, "Generated code is reserved, retrying");
                continue;
            }

            if self.repository.exists(&code).await? {
                debug!(code = %code, attempt, "Generated code collides, retrying");
                continue;
            }

            let new_link = NewShortLink {
                id: code,
                target_url: target_url.clone(),
            };

            match self.repository.insert(new_link).await {
                Ok(link) => {
                    metrics::counter!("links_created_total", "kind" => "generated").increment(1);
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "Generated code taken by a concurrent insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Could not allocate a free short code"
        );

        Err(AppError::internal(
            "Failed to generate unique identifier",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }
}
