//! Session gatekeeper: the two-state login/logout machine.
//!
//! A client is either `Anonymous` or `Authenticated`. A successful
//! [`SessionGatekeeper::attempt_login`] moves it to `Authenticated` (or
//! replaces the existing session), [`SessionGatekeeper::logout`] moves it
//! back. Nothing else changes the state; sessions never expire here.

pub mod health;

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use agency_core::types::{LOGIN_TIME_FORMAT, SessionState};
use agency_core::{Session, SessionStore};

use crate::credentials::CredentialTable;
use crate::error::AuthError;

pub use health::HealthStatus;

/// Decides whether a client is logged in and drives session transitions.
#[derive(Debug, Clone)]
pub struct SessionGatekeeper {
    /// Registered users.
    credentials: Arc<CredentialTable>,
}

impl SessionGatekeeper {
    /// Creates a gatekeeper over the given credential table.
    pub fn new(credentials: Arc<CredentialTable>) -> Self {
        Self { credentials }
    }

    /// The credential table this gatekeeper checks against.
    pub fn credentials(&self) -> &CredentialTable {
        &self.credentials
    }

    /// Current state of the client behind `store`.
    pub fn state<S: SessionStore + ?Sized>(&self, store: &S) -> SessionState {
        SessionState::from(store.get())
    }

    /// Whether the client behind `store` holds a session. No side effects.
    pub fn check_authenticated<S: SessionStore + ?Sized>(&self, store: &S) -> bool {
        self.state(store).is_authenticated()
    }

    /// Checks `username`/`password` and, on success, stores a fresh session.
    ///
    /// On failure the store is left untouched.
    pub fn attempt_login<S: SessionStore + ?Sized>(
        &self,
        store: &mut S,
        username: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if !self.credentials.verify(username, password) {
            warn!(username = %username, "Login failed: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let login_time = Local::now().format(LOGIN_TIME_FORMAT).to_string();
        let session = Session::new(username, login_time);
        store.set(session.clone());

        info!(username = %username, login_time = %session.login_time, "Login successful");
        Ok(session)
    }

    /// Clears all session state, whatever it was.
    pub fn logout<S: SessionStore + ?Sized>(&self, store: &mut S) {
        if let Some(session) = store.get() {
            info!(username = %session.username, "User logged out");
        }
        store.clear();
    }

    /// Liveness report. Always healthy; no dependencies are probed.
    pub fn health_check(&self) -> HealthStatus {
        HealthStatus::healthy()
    }
}
