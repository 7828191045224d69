//! # agency-core
//!
//! Core crate for Agency Login. Contains configuration schemas, the
//! session and flash message types, the [`SessionStore`] seam and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Agency crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use traits::SessionStore;
pub use types::{FlashCategory, FlashMessage, Session};
