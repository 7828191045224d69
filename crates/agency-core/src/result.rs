//! Convenience result type alias for Agency Login.

use crate::error::AppError;

/// A specialized `Result` type for Agency Login operations.
pub type AppResult<T> = Result<T, AppError>;
