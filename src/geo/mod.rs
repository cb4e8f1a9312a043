//! Campus geometry resolution.
//!
//! Resolves a place name into a boundary polygon and centroid using a
//! Nominatim-compatible geocoder, and caches the result per name for the
//! lifetime of the loader.

mod loader;
mod nominatim;
mod types;

// Re-export public API
pub use loader::GeometryLoader;
pub use nominatim::fetch_geometry;
pub use types::LocationGeometry;
