//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use agency_auth::{CredentialTable, SessionGatekeeper};
use agency_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything in here
/// is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Login/logout state machine over the credential table
    pub gatekeeper: Arc<SessionGatekeeper>,
    /// Cookie signing key derived from `auth.secret_key`
    pub cookie_key: Key,
}

impl AppState {
    /// Builds the state from a loaded configuration.
    pub fn new(config: AppConfig) -> Self {
        let credentials = Arc::new(CredentialTable::from_config(&config.auth));
        let gatekeeper = Arc::new(SessionGatekeeper::new(credentials));
        let cookie_key = derive_cookie_key(&config.auth.secret_key);

        Self {
            config: Arc::new(config),
            gatekeeper,
            cookie_key,
        }
    }

    /// Whether session cookies carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.config.auth.secure_cookies
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("gatekeeper", &self.gatekeeper)
            .finish_non_exhaustive()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Stretches an arbitrary-length secret to the 64 bytes a signing key needs.
pub fn derive_cookie_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}
