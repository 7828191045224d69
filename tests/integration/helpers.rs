//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use axum::Router;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum_extra::extract::cookie::Cookie;
use tower::ServiceExt;

use agency_api::{AppState, build_router};
use agency_core::config::AppConfig;

pub use agency_api::session::{FLASH_COOKIE, SESSION_COOKIE};

/// Test application with a browser-like cookie jar.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Cookies the "browser" currently holds
    pub cookies: BTreeMap<String, String>,
}

impl TestApp {
    /// Create a test application with the default credential table
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.secret_key = "integration-test-secret".to_string();
        Self::with_config(config)
    }

    /// Create a test application from an explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            router: build_router(AppState::new(config)),
            cookies: BTreeMap::new(),
        }
    }

    /// GET `path`
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let req = Request::builder().method("GET").uri(path);
        self.send(req, Body::empty()).await
    }

    /// POST `fields` as a urlencoded form
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        self.send(req, Body::from(body)).await
    }

    /// Log in through the form and assert it worked
    pub async fn login(&mut self, username: &str, password: &str) {
        let response = self
            .post_form("/login", &[("username", username), ("password", password)])
            .await;

        assert_eq!(
            response.status,
            StatusCode::FOUND,
            "Login failed: {}",
            response.body
        );
        assert_eq!(response.location.as_deref(), Some("/dashboard"));
    }

    async fn send(&mut self, mut req: axum::http::request::Builder, body: Body) -> TestResponse {
        if !self.cookies.is_empty() {
            let header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            req = req.header(COOKIE, header);
        }

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let set_cookies: Vec<Cookie<'static>> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(|v| Cookie::parse(v.to_string()).expect("Malformed Set-Cookie"))
            .collect();

        for cookie in &set_cookies {
            if cookie.value().is_empty() {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }

        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            location,
            set_cookies,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Location` header, if any
    pub location: Option<String>,
    /// Cookies set (or removed) by this response
    pub set_cookies: Vec<Cookie<'static>>,
    /// Body as text
    pub body: String,
}

impl TestResponse {
    /// The `Set-Cookie` for `name`, if this response sent one
    pub fn set_cookie(&self, name: &str) -> Option<&Cookie<'static>> {
        self.set_cookies.iter().find(|c| c.name() == name)
    }

    /// Whether this is a redirect to `path`
    pub fn is_redirect_to(&self, path: &str) -> bool {
        self.status == StatusCode::FOUND && self.location.as_deref() == Some(path)
    }
}
