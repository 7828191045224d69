//! Health check handler.

use axum::Json;
use axum::extract::State;

use agency_auth::HealthStatus;

use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.gatekeeper.health_check())
}
