//! `/map` handler.

use axum::extract::State;
use axum::response::Html;

use super::super::extract::ApiQuery;
use super::super::state::AppState;
use super::super::types::{ApiError, TimeRange};
use crate::map::{build_map, records_to_points};

/// Renders the campus map with the points in the optional time range.
pub async fn map_handler(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<TimeRange>,
) -> Result<Html<String>, ApiError> {
    let (start, end) = range.bounds()?;
    let records = state.store.filter_by_date(start, end);
    let doc = build_map(&state.geometry, records_to_points(&records), state.map_zoom);
    Ok(Html(doc.render_html()))
}
