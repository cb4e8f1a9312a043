//! Interactive map rendering.
//!
//! Builds a Leaflet map showing the campus polygon, one marker per recorded
//! point, and a path joining the points in chronological order.

mod document;
mod html;

pub use document::{build_map, records_to_points, Layer, MapDocument, MapPoint};
