//! campus_tracker library: points around a campus, on a map, over HTTP
//!
//! The library resolves a campus boundary from a place name, keeps location
//! samples in a thread-safe in-memory store, renders both as an interactive
//! Leaflet map, and serves everything through an axum API. A terminal
//! dashboard consumes that API.
//!
//! # Example
//!
//! ```no_run
//! use campus_tracker::{render_static_map, Config};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     location_name: "Pontificia Universidad Javeriana, Cali, Colombia".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = render_static_map(&config, Path::new("campus.html")).await?;
//! println!("Drew {} points for {}", report.points, report.location_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod dashboard;
mod error_handling;
mod geo;
pub mod initialization;
pub mod map;
pub mod server;
pub mod store;

// Re-export public API
pub use app::{
    demo_points, prepare_state, render_static_map, run_server, shutdown_signal, ServeOptions,
    StaticMapReport,
};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    ConnectivityError, GeometryResolutionError, InitializationError, ValidationError,
};
pub use geo::{fetch_geometry, GeometryLoader, LocationGeometry};
pub use map::{build_map, MapDocument};
pub use server::{build_router, start_server, AppState};
pub use store::{LocationRecord, LocationStore};
