mod common;

use axum::http::StatusCode;
use shortlink::domain::click_worker::process_click;
use shortlink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let mut ctx = common::create_test_context();
    common::create_test_link(&ctx.repo, "abc1234", "https://example.com/target", 0).await;

    let response = ctx.server.get("/abc1234").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");

    let event = ctx.click_rx.try_recv().unwrap();
    assert_eq!(event.id, "abc1234");
}

#[tokio::test]
async fn test_redirect_counts_click() {
    let mut ctx = common::create_test_context();
    common::create_test_link(&ctx.repo, "counted", "https://example.com", 0).await;

    ctx.server
        .get("/counted")
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);

    let event = ctx.click_rx.recv().await.unwrap();
    assert!(process_click(ctx.repo.as_ref(), &event).await);

    let link = ctx.repo.find_by_id("counted").await.unwrap().unwrap();
    assert_eq!(link.click_count, 1);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let mut ctx = common::create_test_context();

    let response = ctx.server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert!(ctx.click_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_redirect_not_found_fallback() {
    let ctx = common::create_test_context_with_fallback(Some(
        "https://example.com/not-found".to_string(),
    ));

    let response = ctx.server.get("/missing").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/not-found");
}

#[tokio::test]
async fn test_redirect_after_shorten() {
    let mut ctx = common::create_test_context();

    let created = ctx
        .server
        .post("/shorten")
        .json(&serde_json::json!({ "target_url": "example.com/landing" }))
        .await
        .json::<serde_json::Value>();
    let id = created["id"].as_str().unwrap();

    let response = ctx.server.get(&format!("/{id}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/landing");
    assert_eq!(ctx.click_rx.try_recv().unwrap().id, id);
}
