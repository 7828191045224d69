//! Integration tests for session gating and cookie handling.

use axum::http::StatusCode;
use axum_extra::extract::cookie::SameSite;

use agency_core::config::AppConfig;
use crate::helpers::{SESSION_COOKIE, TestApp};

#[tokio::test]
async fn test_dashboard_requires_session() {
    let mut app = TestApp::new();

    let response = app.get("/dashboard").await;

    assert!(response.is_redirect_to("/login"));
}

#[tokio::test]
async fn test_tampered_session_cookie_is_anonymous() {
    let mut app = TestApp::new();
    app.login("admin", "password123").await;

    let value = app.cookies.get(SESSION_COOKIE).cloned().unwrap();
    let mut tampered = value.clone();
    tampered.push('A');
    app.cookies.insert(SESSION_COOKIE.to_string(), tampered);

    let response = app.get("/dashboard").await;
    assert!(response.is_redirect_to("/login"));

    app.cookies.insert(SESSION_COOKIE.to_string(), "forged".to_string());
    let response = app.get("/").await;
    assert!(response.is_redirect_to("/login"));
}

#[tokio::test]
async fn test_cookie_from_other_secret_is_rejected() {
    let mut first = TestApp::new();
    first.login("admin", "password123").await;
    let value = first.cookies.get(SESSION_COOKIE).cloned().unwrap();

    let mut config = AppConfig::default();
    config.auth.secret_key = "a-different-secret".to_string();
    let mut second = TestApp::with_config(config);
    second.cookies.insert(SESSION_COOKIE.to_string(), value);

    let response = second.get("/dashboard").await;
    assert!(response.is_redirect_to("/login"));
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let mut app = TestApp::new();

    let response = app
        .post_form("/login", &[("username", "admin"), ("password", "password123")])
        .await;
    let cookie = response.set_cookie(SESSION_COOKIE).unwrap();

    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_ne!(cookie.secure(), Some(true));
    assert!(cookie.max_age().is_none());
}

#[tokio::test]
async fn test_secure_cookies_setting() {
    let mut config = AppConfig::default();
    config.auth.secure_cookies = true;
    let mut app = TestApp::with_config(config);

    let response = app
        .post_form("/login", &[("username", "admin"), ("password", "password123")])
        .await;
    let cookie = response.set_cookie(SESSION_COOKIE).unwrap();

    assert_eq!(cookie.secure(), Some(true));
}

#[tokio::test]
async fn test_relogin_replaces_session() {
    let mut app = TestApp::new();
    app.login("admin", "password123").await;
    app.login("user", "userpass").await;

    let response = app.get("/dashboard").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Welcome, user!"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let mut app = TestApp::new();

    let response = app.get("/admin").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
