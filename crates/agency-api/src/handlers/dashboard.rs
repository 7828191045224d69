//! Protected dashboard page.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use chrono::Local;

use agency_core::types::LOGIN_TIME_FORMAT;

use crate::error::ApiError;
use crate::session::CookieSessionStore;
use crate::state::AppState;
use crate::views::{self, DashboardPage};

use super::require_session;

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    mut store: CookieSessionStore,
) -> Result<Response, ApiError> {
    let session = match require_session(&state.gatekeeper, &store) {
        Ok(session) => session,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let login_time = if session.login_time.is_empty() {
        "N/A".to_string()
    } else {
        session.login_time
    };

    let page = views::render(&DashboardPage {
        username: session.username,
        login_time,
        server_time: Local::now().format(LOGIN_TIME_FORMAT).to_string(),
        flashes: store.take_flashes(),
    })?;

    Ok((store, page).into_response())
}
