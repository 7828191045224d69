//! Auth handlers: login form, login submit, logout.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{IntoResponse, Response};
use validator::Validate;

use agency_auth::AuthError;
use agency_core::FlashMessage;
use agency_core::error::AppError;

use crate::dto::LoginForm;
use crate::error::ApiError;
use crate::session::CookieSessionStore;
use crate::state::AppState;
use crate::views::{self, LoginPage};

use super::{DASHBOARD_PATH, Found, LOGIN_PATH};

/// GET /login
pub async fn login_page(mut store: CookieSessionStore) -> Result<Response, ApiError> {
    let page = views::render(&LoginPage {
        flashes: store.take_flashes(),
    })?;
    Ok((store, page).into_response())
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    mut store: CookieSessionStore,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let Form(form) = form.map_err(|e| AppError::validation(e.body_text()))?;
    form.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    match state
        .gatekeeper
        .attempt_login(&mut store, &form.username, &form.password)
    {
        Ok(_) => {
            store.push_flash(FlashMessage::success("Login successful!"));
            Ok((store, Found(DASHBOARD_PATH)).into_response())
        }
        Err(err @ AuthError::InvalidCredentials) => {
            let mut flashes = store.take_flashes();
            flashes.push(FlashMessage::error(err.to_string()));
            let page = views::render(&LoginPage { flashes })?;
            Ok((store, page).into_response())
        }
    }
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, mut store: CookieSessionStore) -> Response {
    state.gatekeeper.logout(&mut store);
    store.push_flash(FlashMessage::success("You have been logged out."));
    (store, Found(LOGIN_PATH)).into_response()
}
