//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login form body (`application/x-www-form-urlencoded`).
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
