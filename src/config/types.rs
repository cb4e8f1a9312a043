//! Configuration types.
//!
//! This module defines the enums and the `Config` struct shared by the CLI
//! and by library callers.

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_GEOCODER_URL, DEFAULT_LOCATION_NAME, DEFAULT_MAP_ZOOM, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Settings shared by every stage: which place to geocode, how to draw the
/// map, and how many points to keep.
///
/// # Examples
///
/// ```
/// use campus_tracker::Config;
///
/// let config = Config {
///     history_limit: Some(500),
///     ..Default::default()
/// };
/// assert_eq!(config.map_zoom, 17);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Place name geocoded into the campus polygon
    pub location_name: String,

    /// Zoom level of the rendered map
    pub map_zoom: u8,

    /// Maximum number of points kept in memory. `None` keeps every point.
    pub history_limit: Option<usize>,

    /// Base URL of the Nominatim-compatible geocoder
    pub geocoder_url: String,

    /// Per-request timeout in seconds for outbound HTTP calls
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location_name: DEFAULT_LOCATION_NAME.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
            history_limit: None,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_format_debug() {
        assert_eq!(format!("{:?}", LogFormat::Plain), "Plain");
        assert_eq!(format!("{:?}", LogFormat::Json), "Json");
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.location_name, DEFAULT_LOCATION_NAME);
        assert_eq!(config.map_zoom, 17);
        assert_eq!(config.history_limit, None);
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.user_agent.starts_with("campus_tracker/"));
        assert_eq!(config.geocoder_url, "https://nominatim.openstreetmap.org");
    }
}
