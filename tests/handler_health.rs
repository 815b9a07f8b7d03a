mod common;

use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_ping() {
    let ctx = common::create_test_context();

    let response = ctx.server.get("/ping").await;

    response.assert_status_ok();
    response.assert_json(&serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_ping_head() {
    let ctx = common::create_test_context();

    let response = ctx.server.method(Method::HEAD, "/ping").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_root_info() {
    let ctx = common::create_test_context();

    let response = ctx.server.get("/").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["app"], "shortlink");
    assert!(!json["endpoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_healthy() {
    let ctx = common::create_test_context();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["click_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_click_queue_closed() {
    let ctx = common::create_test_context();
    drop(ctx.click_rx);

    let response = ctx.server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["click_queue"]["status"], "error");
}
