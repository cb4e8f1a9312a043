//! Demo points shared by the static map and the API seed.

use crate::error_handling::ValidationError;
use crate::store::LocationRecord;

/// The two sample points near the campus main entrance.
const DEMO_POINTS: [(f64, f64, &str); 2] = [
    (3.3415, -76.5295, "Punto 1"),
    (3.3420, -76.5288, "Punto 2"),
];

/// Builds the demo records tagged with `source`, stamped now.
pub fn demo_points(source: &str) -> Result<Vec<LocationRecord>, ValidationError> {
    DEMO_POINTS
        .iter()
        .map(|&(lat, lon, label)| {
            Ok(LocationRecord::new(lat, lon)?
                .with_label(label)
                .with_source(source))
        })
        .collect()
}
