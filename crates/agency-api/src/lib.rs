//! # agency-api
//!
//! HTTP layer for Agency Login built on Axum.
//!
//! Provides the page and health routes, the signed-cookie session store,
//! flash messages, HTML views, request logging and error mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
