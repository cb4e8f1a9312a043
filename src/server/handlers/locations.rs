//! `/locations` handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::super::extract::{ApiJson, ApiQuery};
use super::super::state::AppState;
use super::super::types::{ApiError, LocationIn, LocationOut, TimeRange};

/// Lists points within the optional time range, oldest first.
pub async fn list_locations(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<TimeRange>,
) -> Result<Json<Vec<LocationOut>>, ApiError> {
    let (start, end) = range.bounds()?;
    let records = state.store.filter_by_date(start, end);
    Ok(Json(records.iter().map(LocationOut::from).collect()))
}

/// Validates and stores a new point, echoing it back with its timestamp.
pub async fn create_location(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LocationIn>,
) -> Result<(StatusCode, Json<LocationOut>), ApiError> {
    let record = payload.into_record()?;
    let out = LocationOut::from(&record);
    state.store.add(record);
    log::info!(
        "Stored point ({:.5}, {:.5}) from '{}'",
        out.latitude,
        out.longitude,
        out.source
    );
    Ok((StatusCode::CREATED, Json(out)))
}
