//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the outbound HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config (Nominatim requires one)
/// - Per-request timeout from the config
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails,
/// for example when the User-Agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
