//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AuthService, LinkService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::utils::reserved_words::ReservedWords;

/// Services and settings shared by every request handler.
///
/// Built once at startup; cloning is cheap (all fields are `Arc` or small).
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub stats_service: Arc<StatsService<dyn LinkRepository>>,
    pub auth_service: Arc<AuthService>,
    /// Where unknown identifiers redirect; `None` answers 404.
    pub not_found_redirect: Option<String>,
}

impl AppState {
    /// Wires the services around one repository.
    ///
    /// # Errors
    ///
    /// Fails if the admin token is empty or no randomness is available.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        reserved: ReservedWords,
        base_url: &str,
        admin_api_token: &str,
        not_found_redirect: Option<String>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> anyhow::Result<Self> {
        let link_service = Arc::new(LinkService::new(
            repository.clone(),
            Arc::new(reserved),
            base_url,
            click_sender,
        ));
        let stats_service = Arc::new(StatsService::new(repository));
        let auth_service = Arc::new(AuthService::new(admin_api_token)?);

        Ok(Self {
            link_service,
            stats_service,
            auth_service,
            not_found_redirect,
        })
    }
}
