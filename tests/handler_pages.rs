mod common;

use axum::http::StatusCode;
use common::{FailingLinkRepository, InMemoryLinkRepository};
use std::sync::Arc;

#[tokio::test]
async fn test_home_page() {
    let server = common::test_server(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("URL Shortener Microservice"));
    assert!(html.contains(r#"name="url""#));
}

#[tokio::test]
async fn test_public_asset() {
    let server = common::test_server(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/public/style.css").await;

    response.assert_status_ok();
    assert!(response.text().contains("fieldset"));
}

#[tokio::test]
async fn test_public_asset_missing() {
    let server = common::test_server(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/public/missing.css").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::test_server(Arc::new(InMemoryLinkRepository::new()));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let server = common::test_server(Arc::new(FailingLinkRepository));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_cors_header_present() {
    let server = common::test_server(Arc::new(InMemoryLinkRepository::new()));

    let response = server
        .get("/health")
        .add_header("Origin", "https://somewhere.example")
        .await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}
