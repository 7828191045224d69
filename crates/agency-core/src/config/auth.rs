//! Authentication configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Secret key used when none is configured. Only suitable for local demos.
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-change-this";

/// Authentication, cookie signing and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret used to derive the cookie signing key.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
    /// Mark session cookies `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookies: bool,
    /// Username to plaintext password table.
    #[serde(default = "default_users")]
    pub users: BTreeMap<String, String>,
}

impl AuthConfig {
    /// Whether the built-in demo secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: default_secret_key(),
            secure_cookies: false,
            users: default_users(),
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret_key", &"<redacted>")
            .field("secure_cookies", &self.secure_cookies)
            .field("users", &self.users.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn default_secret_key() -> String {
    DEFAULT_SECRET_KEY.to_string()
}

fn default_users() -> BTreeMap<String, String> {
    let mut users = BTreeMap::new();
    users.insert("admin".to_string(), "password123".to_string());
    users.insert("user".to_string(), "userpass".to_string());
    users
}
