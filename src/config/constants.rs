//! Configuration constants.
//!
//! Defaults for every setting exposed on the command line, plus a few fixed
//! operational parameters.

/// Place name geocoded to build the campus polygon.
pub const DEFAULT_LOCATION_NAME: &str = "Pontificia Universidad Javeriana, Cali, Colombia";

/// Zoom level used when rendering the map.
pub const DEFAULT_MAP_ZOOM: u8 = 17;

/// Base URL of the Nominatim geocoding service.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Per-request timeout in seconds for outbound HTTP calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Smallest refresh interval accepted by the dashboard.
pub const MIN_REFRESH_SECS: u64 = 1;

/// User-Agent sent to the geocoder and the API.
///
/// Nominatim's usage policy rejects requests without an identifying agent.
pub const DEFAULT_USER_AGENT: &str = concat!("campus_tracker/", env!("CARGO_PKG_VERSION"));

// API server
/// Interface the API binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port the API binds to.
pub const DEFAULT_PORT: u16 = 8000;
/// Base URL the dashboard talks to when neither `--api-url` nor
/// `TRACKER_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Environment variable holding the dashboard's API base URL.
pub const API_URL_ENV: &str = "TRACKER_API_URL";

// Point store
/// Number of records returned by `LocationStore::latest` when no limit is given.
pub const DEFAULT_LATEST_LIMIT: usize = 10;

/// Source tag for records created without an explicit source.
pub const SOURCE_MANUAL: &str = "manual";
/// Source tag assigned by the API when the request omits one.
pub const SOURCE_API: &str = "api";
/// Source tag for demo points seeded at startup.
pub const SOURCE_SEED: &str = "seed";
/// Source tag for points submitted from the dashboard.
pub const SOURCE_DASHBOARD: &str = "dashboard";

// Map rendering
/// Stroke and fill color of the campus outline.
pub const POLYGON_COLOR: &str = "red";
/// Fill opacity of the campus outline.
pub const POLYGON_FILL_OPACITY: f64 = 0.3;
/// Color of the path connecting the points.
pub const PATH_COLOR: &str = "blue";
/// Stroke width of the connecting path, in pixels.
pub const PATH_WEIGHT: f64 = 2.5;
/// Prefix of the popup text given to markers without a label.
pub const DEFAULT_MARKER_PREFIX: &str = "Punto";

// Dashboard
/// Display timezone name shown in the table header.
pub const DISPLAY_TIMEZONE_NAME: &str = "America/Bogota";
/// Fixed UTC offset of the display timezone (Colombia observes no DST).
pub const DISPLAY_UTC_OFFSET_SECS: i32 = -5 * 60 * 60;
/// Map file written by the dashboard.
pub const DEFAULT_DASHBOARD_MAP_PATH: &str = "dashboard_map.html";
/// Map file written by the static map stage.
pub const DEFAULT_STATIC_MAP_PATH: &str = "stage1_map.html";
/// Latitude pre-filled for manual points (campus main entrance).
pub const DEFAULT_MANUAL_LATITUDE: f64 = 3.3415;
/// Longitude paired with `DEFAULT_MANUAL_LATITUDE`.
pub const DEFAULT_MANUAL_LONGITUDE: f64 = -76.5295;
/// Label pre-filled for manual points.
pub const DEFAULT_MANUAL_LABEL: &str = "Punto manual";
/// Summary text for a last point without a label.
pub const UNLABELLED_POINT: &str = "Sin etiqueta";
