//! # agency-auth
//!
//! Authentication and session gating for Agency Login.
//!
//! ## Modules
//!
//! - `credentials`: the immutable username/password table
//! - `gatekeeper`: login, logout, authentication checks and health
//! - `session`: an in-process [`agency_core::SessionStore`]

pub mod credentials;
pub mod error;
pub mod gatekeeper;
pub mod session;

pub use credentials::CredentialTable;
pub use error::AuthError;
pub use gatekeeper::{HealthStatus, SessionGatekeeper};
pub use session::MemorySessionStore;
