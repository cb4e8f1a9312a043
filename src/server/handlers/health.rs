//! `/health` handler.

use axum::extract::State;
use axum::Json;

use super::super::state::AppState;
use super::super::types::HealthResponse;

/// Liveness check with the current point count.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        points: state.store.len(),
    })
}
