//! Landing page.

use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::session::CookieSessionStore;
use crate::state::AppState;
use crate::views::{self, HomePage};

use super::require_session;

/// GET /
pub async fn home(
    State(state): State<AppState>,
    store: CookieSessionStore,
) -> Result<Response, ApiError> {
    let session = match require_session(&state.gatekeeper, &store) {
        Ok(session) => session,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let page = views::render(&HomePage {
        username: session.username,
    })?;
    Ok(page.into_response())
}
