//! Authenticated session record and the two-state session model.

use serde::{Deserialize, Serialize};

/// `strftime` format used for `login_time` and server clock displays.
pub const LOGIN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Per-client state established by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated username.
    pub username: String,
    /// Local time of login, formatted with [`LOGIN_TIME_FORMAT`].
    pub login_time: String,
}

impl Session {
    /// Creates a session for `username` logged in at `login_time`.
    pub fn new(username: impl Into<String>, login_time: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            login_time: login_time.into(),
        }
    }
}

/// Whether a client currently holds a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No session; protected pages redirect to the login form.
    Anonymous,
    /// A session exists.
    Authenticated(Session),
}

impl SessionState {
    /// Returns `true` for [`SessionState::Authenticated`].
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

impl From<Option<Session>> for SessionState {
    fn from(value: Option<Session>) -> Self {
        match value {
            Some(session) => Self::Authenticated(session),
            None => Self::Anonymous,
        }
    }
}
