//! Request and response types for the HTTP API.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SOURCE_API;
use crate::error_handling::ValidationError;
use crate::store::LocationRecord;

/// Body of `POST /locations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationIn {
    /// Latitude in degrees, within [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180]
    pub longitude: f64,
    /// Free-text label
    #[serde(default)]
    pub label: String,
    /// Origin tag; `api` when omitted
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    SOURCE_API.to_string()
}

impl LocationIn {
    /// Validates the payload and turns it into a record stamped now.
    pub fn into_record(self) -> Result<LocationRecord, ValidationError> {
        Ok(LocationRecord::new(self.latitude, self.longitude)?
            .with_label(self.label)
            .with_source(self.source))
    }
}

/// Wire form of a stored record.
///
/// Field order here is the JSON field order, independent of the record's
/// internal layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationOut {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Free-text label
    pub label: String,
    /// Origin tag
    pub source: String,
    /// Creation time, RFC 3339 in UTC
    pub created_at: DateTime<Utc>,
}

impl From<&LocationRecord> for LocationOut {
    fn from(record: &LocationRecord) -> Self {
        Self {
            latitude: record.latitude(),
            longitude: record.longitude(),
            label: record.label().to_string(),
            source: record.source().to_string(),
            created_at: record.created_at(),
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the server is up
    pub status: String,
    /// Number of points currently stored
    pub points: usize,
}

/// Optional `start`/`end` query parameters, as received.
///
/// Empty values are treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound, ISO 8601
    pub start: Option<String>,
    /// Inclusive upper bound, ISO 8601
    pub end: Option<String>,
}

impl TimeRange {
    /// Parses both bounds and checks that `end` is not before `start`.
    pub fn bounds(&self) -> Result<(Option<DateTime<Utc>>, Option<DateTime<Utc>>), ValidationError> {
        let start = parse_bound("start", self.start.as_deref())?;
        let end = parse_bound("end", self.end.as_deref())?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(ValidationError::InvalidRange { start, end });
            }
        }
        Ok((start, end))
    }
}

fn parse_bound(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_timestamp(field, raw).map(Some),
    }
}

/// Parses an ISO 8601 timestamp.
///
/// Accepts RFC 3339 with an offset, a naive date-time (`T` or space
/// separated, optional fractional seconds) taken as UTC, or a bare date taken
/// as midnight UTC.
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    Err(ValidationError::InvalidTimestamp {
        field,
        value: raw.to_string(),
    })
}

/// Client-facing error: a 4xx status with `{"detail": "..."}`.
///
/// Validation failures map to 422. Requests axum cannot decode keep the
/// status of the underlying rejection.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    /// HTTP status sent to the client.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message sent in the `detail` field.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}
