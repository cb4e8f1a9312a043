//! Error type definitions.

use chrono::{DateTime, Utc};
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Input rejected before it reaches the point store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Latitude outside [-90, 90].
    #[error("latitude must be between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180].
    #[error("longitude must be between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    /// A query timestamp that is not ISO 8601.
    #[error("invalid {field} timestamp '{value}': expected ISO 8601 (e.g. 2024-05-01T13:45:00Z)")]
    InvalidTimestamp {
        /// Name of the offending parameter (`start` or `end`).
        field: &'static str,
        /// The raw value as received.
        value: String,
    },

    /// `end` earlier than `start`.
    #[error("end ({end}) must not be earlier than start ({start})")]
    InvalidRange {
        /// Lower bound of the rejected range.
        start: DateTime<Utc>,
        /// Upper bound of the rejected range.
        end: DateTime<Utc>,
    },
}

/// The geocoder could not produce a geometry for a place name.
///
/// Fatal at startup; never retried automatically.
#[derive(Error, Debug)]
pub enum GeometryResolutionError {
    /// The configured geocoder URL does not parse.
    #[error("invalid geocoder URL '{url}': {source}")]
    InvalidUrl {
        /// The configured URL.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },

    /// Network failure or undecodable response body.
    #[error("geocoding request for '{name}' failed: {source}")]
    Request {
        /// Place name being resolved.
        name: String,
        /// Underlying client error.
        source: ReqwestError,
    },

    /// The geocoder answered with a non-success status.
    #[error("geocoder returned HTTP {status} for '{name}'")]
    Status {
        /// Place name being resolved.
        name: String,
        /// HTTP status code.
        status: u16,
    },

    /// The geocoder found nothing for the name.
    #[error("geocoder returned no results for '{0}'")]
    NotFound(String),

    /// The result is a point or line rather than an area.
    #[error("geocoder result for '{name}' has no polygon boundary (got {kind})")]
    NoPolygon {
        /// Place name being resolved.
        name: String,
        /// GeoJSON type that was returned instead.
        kind: String,
    },
}

/// The dashboard could not complete a call to the API.
///
/// Shown to the user; the user re-triggers the action.
#[derive(Error, Debug)]
pub enum ConnectivityError {
    /// The configured API base URL does not parse.
    #[error("invalid API URL '{url}': {source}")]
    InvalidUrl {
        /// The configured URL.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },

    /// Connection failure, timeout or undecodable body.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Endpoint that was called.
        url: String,
        /// Underlying client error.
        source: ReqwestError,
    },

    /// The API answered with an unexpected status.
    #[error("{url} returned HTTP {status}: {detail}")]
    Status {
        /// Endpoint that was called.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the response body, if any.
        detail: String,
    },
}
