//! HTTP client for the tracker API.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::error_handling::ConnectivityError;
use crate::server::{LocationIn, LocationOut};

// Longest slice of a non-JSON error body kept in the error message.
const MAX_DETAIL_CHARS: usize = 200;

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Typed wrapper over the API endpoints the dashboard uses.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Arc<reqwest::Client>,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ConnectivityError::InvalidUrl` if `base_url` does not parse.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str) -> Result<Self, ConnectivityError> {
        let base = Url::parse(base_url).map_err(|source| ConnectivityError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self { client, base })
    }

    /// The API base URL, as shown to the user.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }
        url
    }

    fn windowed(&self, path: &str, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Url {
        let mut url = self.endpoint(path);
        if start.is_some() || end.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(start) = start {
                query.append_pair("start", &start.to_rfc3339_opts(SecondsFormat::AutoSi, true));
            }
            if let Some(end) = end {
                query.append_pair("end", &end.to_rfc3339_opts(SecondsFormat::AutoSi, true));
            }
        }
        url
    }

    /// `GET /locations` for the given window.
    pub async fn fetch_locations(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<LocationOut>, ConnectivityError> {
        let url = self.windowed("locations", start, end);
        let response = self.send(self.client.get(url.clone()), &url).await?;
        response.json().await.map_err(|source| request_error(&url, source))
    }

    /// `GET /map` for the given window.
    pub async fn fetch_map_html(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<String, ConnectivityError> {
        let url = self.windowed("map", start, end);
        let response = self.send(self.client.get(url.clone()), &url).await?;
        response.text().await.map_err(|source| request_error(&url, source))
    }

    /// `POST /locations`, returning the stored record.
    pub async fn submit_point(&self, point: &LocationIn) -> Result<LocationOut, ConnectivityError> {
        let url = self.endpoint("locations");
        let response = self
            .send(self.client.post(url.clone()).json(point), &url)
            .await?;
        response.json().await.map_err(|source| request_error(&url, source))
    }

    /// `POST /reset`.
    pub async fn reset(&self) -> Result<(), ConnectivityError> {
        let url = self.endpoint("reset");
        self.send(self.client.post(url.clone()), &url).await?;
        Ok(())
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<Response, ConnectivityError> {
        log::debug!("Calling {}", url);
        let response = request.send().await.map_err(|source| request_error(url, source))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ConnectivityError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            detail: error_detail(status, &body),
        })
    }
}

fn request_error(url: &Url, source: reqwest::Error) -> ConnectivityError {
    ConnectivityError::Request {
        url: url.to_string(),
        source,
    }
}

/// Pulls the `detail` message out of an API error body.
///
/// Falls back to the (truncated) raw body, then to the status reason.
fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.detail;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status.canonical_reason().unwrap_or("no detail").to_string();
    }
    trimmed.chars().take(MAX_DETAIL_CHARS).collect()
}
