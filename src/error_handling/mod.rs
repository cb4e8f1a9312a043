//! Error types.
//!
//! Each failure domain has its own enum:
//! - **Initialization**: logger and HTTP client setup
//! - **Validation**: bad coordinates or time ranges, rejected before the store
//! - **Geometry resolution**: the geocoder could not produce a campus polygon
//! - **Connectivity**: the dashboard could not talk to the API
//!
//! The point store itself has no error type; it cannot fail.

mod types;

// Re-export public API
pub use types::{ConnectivityError, GeometryResolutionError, InitializationError, ValidationError};
