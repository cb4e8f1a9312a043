//! Command-line interface.
//!
//! Global flags configure geocoding, the map and logging; each stage is a
//! subcommand.
//!
//! # Examples
//!
//! ```bash
//! # Stage 1: write a map with two demo points
//! campus_tracker static-map --output campus.html
//!
//! # Stage 2: serve the API, keeping at most 500 points
//! campus_tracker --history-limit 500 serve --port 8000
//!
//! # Stage 3: show the last hour, refreshing every 5 seconds
//! campus_tracker dashboard show --range last-hour --refresh-secs 5
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_DASHBOARD_MAP_PATH, DEFAULT_GEOCODER_URL, DEFAULT_HOST,
    DEFAULT_LOCATION_NAME, DEFAULT_MANUAL_LABEL, DEFAULT_MANUAL_LATITUDE, DEFAULT_MANUAL_LONGITUDE,
    DEFAULT_MAP_ZOOM, DEFAULT_PORT, DEFAULT_STATIC_MAP_PATH, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, SOURCE_DASHBOARD,
};
use crate::config::types::{Config, LogFormat, LogLevel};
use crate::dashboard::RangePreset;
use crate::error_handling::ValidationError;
use crate::server::parse_timestamp;

/// Top-level parser.
#[derive(Debug, Parser)]
#[command(
    name = "campus_tracker",
    version,
    about = "Tracks points around a campus, serves them over HTTP and draws them on a map."
)]
pub struct Cli {
    /// Settings shared by every subcommand
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Stage to run
    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Place name geocoded into the campus polygon
    #[arg(long, global = true, default_value = DEFAULT_LOCATION_NAME)]
    pub location_name: String,

    /// Map zoom level
    #[arg(long, global = true, default_value_t = DEFAULT_MAP_ZOOM)]
    pub map_zoom: u8,

    /// Maximum number of points kept in memory (unset keeps all)
    #[arg(long, global = true)]
    pub history_limit: Option<usize>,

    /// Base URL of the Nominatim-compatible geocoder
    #[arg(long, global = true, default_value = DEFAULT_GEOCODER_URL)]
    pub geocoder_url: String,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value.
    ///
    /// Nominatim rejects anonymous clients; set this to something that
    /// identifies your deployment.
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    /// Library configuration from the parsed flags.
    pub fn to_config(&self) -> Config {
        Config {
            location_name: self.location_name.clone(),
            map_zoom: self.map_zoom,
            history_limit: self.history_limit,
            geocoder_url: self.geocoder_url.clone(),
            timeout_seconds: self.timeout_seconds,
            user_agent: self.user_agent.clone(),
        }
    }
}

/// The three stages.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a standalone HTML map with two demo points
    StaticMap(StaticMapArgs),
    /// Serve the HTTP API
    Serve(ServeArgs),
    /// Terminal dashboard for a running API
    Dashboard(DashboardArgs),
}

/// `static-map` flags.
#[derive(Debug, Args)]
pub struct StaticMapArgs {
    /// HTML file to write
    #[arg(long, default_value = DEFAULT_STATIC_MAP_PATH)]
    pub output: PathBuf,
}

/// `serve` flags.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Start with an empty store instead of the two demo points
    #[arg(long)]
    pub no_seed: bool,
}

/// `dashboard` flags.
#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Base URL of the tracker API
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Dashboard action
    #[command(subcommand)]
    pub action: DashboardCommand,
}

/// Dashboard actions.
#[derive(Debug, Subcommand)]
pub enum DashboardCommand {
    /// Print the points table and write the map
    Show(ShowArgs),
    /// Submit a manual point
    Add(AddArgs),
    /// Remove every point from the API
    Reset,
}

/// `dashboard show` flags.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// History window
    #[arg(long = "range", value_enum, default_value_t = RangePreset::All)]
    pub preset: RangePreset,

    /// Custom window start (ISO 8601; naive times are UTC). Implies `--range custom`.
    #[arg(long, value_parser = parse_start)]
    pub start: Option<DateTime<Utc>>,

    /// Custom window end (ISO 8601; naive times are UTC). Implies `--range custom`.
    #[arg(long, value_parser = parse_end)]
    pub end: Option<DateTime<Utc>>,

    /// File the map HTML is written to
    #[arg(long, default_value = DEFAULT_DASHBOARD_MAP_PATH)]
    pub map_output: PathBuf,

    /// Re-render every N seconds until Ctrl-C
    #[arg(long)]
    pub refresh_secs: Option<u64>,
}

impl ShowArgs {
    /// The effective preset: giving `--start` or `--end` selects `custom`.
    pub fn effective_preset(&self) -> RangePreset {
        if self.start.is_some() || self.end.is_some() {
            RangePreset::Custom
        } else {
            self.preset
        }
    }
}

/// `dashboard add` flags.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Latitude in degrees
    #[arg(long, default_value_t = DEFAULT_MANUAL_LATITUDE, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in degrees
    #[arg(long, default_value_t = DEFAULT_MANUAL_LONGITUDE, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Point label
    #[arg(long, default_value = DEFAULT_MANUAL_LABEL)]
    pub label: String,

    /// Source tag
    #[arg(long, default_value = SOURCE_DASHBOARD)]
    pub source: String,
}

fn parse_start(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    parse_timestamp("start", raw)
}

fn parse_end(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    parse_timestamp("end", raw)
}
