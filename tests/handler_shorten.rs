mod common;

use axum::http::StatusCode;
use serde_json::json;
use shortlink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_shorten_generates_code() {
    let ctx = common::create_test_context();

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let id = json["id"].as_str().unwrap();
    assert_eq!(id.len(), 7);
    assert_eq!(json["target_url"], "https://example.com/some/long/path");
    assert_eq!(json["short_url"], format!("{}/{}", common::BASE_URL, id));

    let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.click_count, 0);
}

#[tokio::test]
async fn test_shorten_prefixes_missing_scheme() {
    let ctx = common::create_test_context();

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["target_url"], "https://example.com");
}

#[tokio::test]
async fn test_shorten_sanitizes_custom_alias() {
    let ctx = common::create_test_context();

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "https://example.com", "custom_id": "Café!!" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], "cafe");
    assert_eq!(json["short_url"], "https://s.example.com/cafe");
}

#[tokio::test]
async fn test_shorten_blank_alias_generates_code() {
    let ctx = common::create_test_context();

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "https://example.com", "custom_id": "  " }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"].as_str().unwrap().len(), 7);
}

#[tokio::test]
async fn test_shorten_duplicate_alias_conflict() {
    let ctx = common::create_test_context();
    common::create_test_link(&ctx.repo, "taken", "https://first.example.com", 0).await;

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "https://second.example.com", "custom_id": "Taken" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Alias already exists");

    let stored = ctx.repo.find_by_id("taken").await.unwrap().unwrap();
    assert_eq!(stored.target_url, "https://first.example.com");
}

#[tokio::test]
async fn test_shorten_reserved_alias() {
    let ctx = common::create_test_context();

    for alias in ["stats", "Shorten", "login", "favicon"] {
        let response = ctx
            .server
            .post("/shorten")
            .json(&json!({ "target_url": "https://example.com", "custom_id": alias }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], "This alias is reserved for system use");
    }

    assert_eq!(ctx.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_invalid_aliases() {
    let ctx = common::create_test_context();

    let cases = [
        ("!!!", "Invalid custom alias: empty after sanitization"),
        ("a", "Invalid custom alias: too short"),
        ("2024", "Invalid custom alias: numeric-only"),
        ("ROOT", "Invalid custom alias: disallowed pattern"),
    ];

    for (alias, message) in cases {
        let response = ctx
            .server
            .post("/shorten")
            .json(&json!({ "target_url": "https://example.com", "custom_id": alias }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(json["error"]["message"], message, "alias {alias:?}");
    }
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let ctx = common::create_test_context();

    for url in ["ftp://example.com/file", "javascript:alert(1)", "not a url"] {
        let response = ctx
            .server
            .post("/shorten")
            .json(&json!({ "target_url": url }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Invalid URL format", "url {url:?}");
    }
}

#[tokio::test]
async fn test_shorten_empty_url_fails_request_validation() {
    let ctx = common::create_test_context();

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["fields"]["target_url"].is_array());
}

#[tokio::test]
async fn test_shorten_rejects_control_characters_in_url() {
    let ctx = common::create_test_context();

    for url in ["https://example.com/a\nb", "https://example.com/a\tb"] {
        let response = ctx
            .server
            .post("/shorten")
            .json(&json!({ "target_url": url, "custom_id": "split-line" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Invalid URL format", "url {url:?}");
    }

    assert!(ctx.repo.find_by_id("split-line").await.unwrap().is_none());
    assert_eq!(ctx.repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_trailing_slash_on_base_url_is_trimmed() {
    let ctx = common::create_test_context_with_base_url("https://s.example.com//");

    let response = ctx
        .server
        .post("/shorten")
        .json(&json!({ "target_url": "https://example.com", "custom_id": "docs-home" }))
        .await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_url"], "https://s.example.com/docs-home");
}
