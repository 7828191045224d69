//! Integration tests for the health endpoint.

use axum::http::StatusCode;
use chrono::DateTime;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_healthy() {
    let mut app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "healthy");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_health_ignores_session() {
    let mut app = TestApp::new();
    app.login("admin", "password123").await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "healthy");
}
