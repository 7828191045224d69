//! Route handlers organized by page.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod home;

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};

use agency_auth::SessionGatekeeper;
use agency_core::Session;
use agency_core::types::SessionState;

use crate::session::CookieSessionStore;

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";
/// Path of the dashboard.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// `302 Found` redirect to a local path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found(pub &'static str);

impl IntoResponse for Found {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(LOCATION, self.0)]).into_response()
    }
}

/// Returns the session, or a redirect to the login page for anonymous clients.
pub(crate) fn require_session(
    gatekeeper: &SessionGatekeeper,
    store: &CookieSessionStore,
) -> Result<Session, Found> {
    match gatekeeper.state(store) {
        SessionState::Authenticated(session) => Ok(session),
        SessionState::Anonymous => Err(Found(LOGIN_PATH)),
    }
}
