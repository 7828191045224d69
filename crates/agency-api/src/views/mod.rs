//! Server-rendered HTML pages.

use askama::Template;
use axum::response::Html;

use agency_core::FlashMessage;
use agency_core::error::{AppError, ErrorKind};
use agency_core::result::AppResult;

/// `GET /login` and failed `POST /login`.
#[derive(Debug, Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    /// Messages shown above the form.
    pub flashes: Vec<FlashMessage>,
}

/// `GET /dashboard`.
#[derive(Debug, Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    /// Logged-in user.
    pub username: String,
    /// When the session was created, or `N/A`.
    pub login_time: String,
    /// Current server time.
    pub server_time: String,
    /// Messages shown above the session card.
    pub flashes: Vec<FlashMessage>,
}

/// `GET /` for a logged-in user.
#[derive(Debug, Template)]
#[template(path = "home.html")]
pub struct HomePage {
    /// Logged-in user.
    pub username: String,
}

/// Renders `page` into an HTML response body.
pub fn render<T: Template>(page: &T) -> AppResult<Html<String>> {
    page.render().map(Html).map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Template render failed: {e}"), e)
    })
}
