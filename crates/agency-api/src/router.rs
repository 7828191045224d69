//! Route definitions for the Agency Login HTTP surface.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Landing page and dashboard
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::home))
        .route(handlers::DASHBOARD_PATH, get(handlers::dashboard::dashboard))
}

/// Login form, login submit, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            handlers::LOGIN_PATH,
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
