//! `/reset` handler.

use axum::extract::State;
use axum::http::StatusCode;

use super::super::state::AppState;

/// Drops every stored point.
pub async fn reset_handler(State(state): State<AppState>) -> StatusCode {
    let dropped = state.store.len();
    state.store.clear();
    log::info!("Store reset ({} point(s) dropped)", dropped);
    StatusCode::NO_CONTENT
}
