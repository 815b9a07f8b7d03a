#![allow(dead_code)]

use axum_test::TestServer;
use shortlink::domain::click_event::ClickEvent;
use shortlink::domain::entities::NewShortLink;
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::MemoryLinkRepository;
use shortlink::routes;
use shortlink::state::AppState;
use shortlink::utils::reserved_words::ReservedWords;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const ADMIN_TOKEN: &str = "test-admin-token";
pub const BASE_URL: &str = "https://s.example.com";

pub struct TestContext {
    pub server: TestServer,
    pub repo: Arc<MemoryLinkRepository>,
    pub click_rx: mpsc::Receiver<ClickEvent>,
}

pub fn create_test_state(
    not_found_redirect: Option<String>,
) -> (AppState, Arc<MemoryLinkRepository>, mpsc::Receiver<ClickEvent>) {
    create_test_state_with_base_url(BASE_URL, not_found_redirect)
}

pub fn create_test_state_with_base_url(
    base_url: &str,
    not_found_redirect: Option<String>,
) -> (AppState, Arc<MemoryLinkRepository>, mpsc::Receiver<ClickEvent>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        repo.clone(),
        ReservedWords::default(),
        base_url,
        ADMIN_TOKEN,
        not_found_redirect,
        tx,
    )
    .unwrap();

    (state, repo, rx)
}

/// Full router without rate limiting.
pub fn create_test_context() -> TestContext {
    create_test_context_with_fallback(None)
}

pub fn create_test_context_with_fallback(not_found_redirect: Option<String>) -> TestContext {
    let (state, repo, click_rx) = create_test_state(not_found_redirect);
    into_context(state, repo, click_rx)
}

pub fn create_test_context_with_base_url(base_url: &str) -> TestContext {
    let (state, repo, click_rx) = create_test_state_with_base_url(base_url, None);
    into_context(state, repo, click_rx)
}

fn into_context(
    state: AppState,
    repo: Arc<MemoryLinkRepository>,
    click_rx: mpsc::Receiver<ClickEvent>,
) -> TestContext {
    let app = routes::router(state, None).unwrap();

    TestContext {
        server: TestServer::new(app).unwrap(),
        repo,
        click_rx,
    }
}

pub async fn create_test_link(repo: &MemoryLinkRepository, id: &str, url: &str, clicks: u32) {
    repo.insert(NewShortLink {
        id: id.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap();

    for _ in 0..clicks {
        repo.increment_clicks(id).await.unwrap();
    }
}
