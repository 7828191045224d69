//! Username to password lookup table.

use std::collections::HashMap;
use std::fmt;

use agency_core::config::AuthConfig;

/// Immutable credential table built once at startup.
///
/// Passwords are kept and compared as plaintext.
#[derive(Clone, Default)]
pub struct CredentialTable {
    users: HashMap<String, String>,
}

impl CredentialTable {
    /// Builds a table from `(username, password)` pairs.
    pub fn new<I, U, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            users: entries
                .into_iter()
                .map(|(u, p)| (u.into(), p.into()))
                .collect(),
        }
    }

    /// Builds the table from the `auth.users` configuration section.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.users.clone())
    }

    /// Returns `true` iff `username` is registered with exactly `password`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table has no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl fmt::Debug for CredentialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialTable")
            .field("users", &self.users.len())
            .finish()
    }
}
