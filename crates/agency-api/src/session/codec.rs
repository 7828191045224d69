//! Cookie payload encoding: JSON, then URL-safe base64 without padding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use serde::de::DeserializeOwned;

use agency_core::error::{AppError, ErrorKind};
use agency_core::result::AppResult;

/// Encodes `value` into a cookie-safe string.
pub fn encode<T: Serialize>(value: &T) -> AppResult<String> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a value produced by [`encode`].
pub fn decode<T: DeserializeOwned>(raw: &str) -> AppResult<T> {
    let json = URL_SAFE_NO_PAD.decode(raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Invalid cookie encoding: {e}"),
            e,
        )
    })?;
    Ok(serde_json::from_slice(&json)?)
}
