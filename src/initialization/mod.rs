//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - HTTP client used for geocoding and for talking to the API

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
