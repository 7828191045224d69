//! Health report.

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

/// Body of the `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"healthy"`.
    pub status: String,
    /// Server local time, RFC 3339 with microseconds.
    pub timestamp: String,
}

impl HealthStatus {
    /// A healthy report stamped with the current time.
    pub fn healthy() -> Self {
        Self::healthy_at(Local::now())
    }

    /// A healthy report stamped with `now`.
    pub fn healthy_at(now: DateTime<Local>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Micros, false),
        }
    }
}
