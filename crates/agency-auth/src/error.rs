//! Gatekeeper errors.

use agency_core::error::{AppError, ErrorKind};
use thiserror::Error;

/// Errors raised by [`crate::SessionGatekeeper`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. The two cases are not distinguished.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::with_source(ErrorKind::Authentication, err.to_string(), err)
    }
}
