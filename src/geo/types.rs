//! Geometry data structures.

use geo::{Centroid, LineString, Polygon};

/// Campus boundary polygon plus its centroid.
///
/// Loaded once per place name and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGeometry {
    name: String,
    boundary: Vec<(f64, f64)>,
    centroid: (f64, f64),
}

impl LocationGeometry {
    /// Builds a geometry from an exterior ring of `(longitude, latitude)`
    /// pairs, computing the centroid from the ring.
    pub fn from_boundary(name: impl Into<String>, boundary: Vec<(f64, f64)>) -> Self {
        let polygon = Polygon::new(LineString::from(boundary.clone()), vec![]);
        Self::from_polygon(name, &polygon, boundary)
    }

    /// Builds a geometry from an already decoded polygon.
    ///
    /// The centroid is area weighted; a zero-area ring degrades to the
    /// centroid of its outline. Only an empty ring has no centroid and is
    /// placed at `(0, 0)`.
    pub(crate) fn from_polygon(
        name: impl Into<String>,
        polygon: &Polygon<f64>,
        boundary: Vec<(f64, f64)>,
    ) -> Self {
        let (lon, lat) = polygon
            .centroid()
            .map(|point| point.x_y())
            .unwrap_or((0.0, 0.0));
        Self {
            name: name.into(),
            boundary,
            centroid: (lat, lon),
        }
    }

    /// The place name this geometry was resolved from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exterior ring as `(longitude, latitude)` pairs, GeoJSON order.
    pub fn boundary(&self) -> &[(f64, f64)] {
        &self.boundary
    }

    /// Centroid as `(latitude, longitude)`.
    pub fn centroid(&self) -> (f64, f64) {
        self.centroid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_centroid_is_lat_lon_ordered() {
        // Square spanning lon -76.54..-76.52, lat 3.33..3.35
        let ring = vec![
            (-76.54, 3.33),
            (-76.52, 3.33),
            (-76.52, 3.35),
            (-76.54, 3.35),
            (-76.54, 3.33),
        ];
        let geometry = LocationGeometry::from_boundary("Campus", ring.clone());
        let (lat, lon) = geometry.centroid();
        assert!((lat - 3.34).abs() < 1e-6);
        assert!((lon + 76.53).abs() < 1e-6);
        assert_eq!(geometry.boundary(), ring.as_slice());
        assert_eq!(geometry.name(), "Campus");
    }

    #[test]
    fn test_open_ring_and_orientation() {
        let open_clockwise = vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
        let geometry = LocationGeometry::from_boundary("Square", open_clockwise);
        assert_close(geometry.centroid(), (0.5, 0.5));
    }

    #[test]
    fn test_centroid_is_area_weighted() {
        // L shape: three unit squares centered at (0.5,0.5), (1.5,0.5), (0.5,1.5).
        let ring = vec![
            (0.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (0.0, 2.0),
        ];
        let geometry = LocationGeometry::from_boundary("L", ring);
        let x = (0.5 + 1.5 + 0.5) / 3.0;
        let y = (0.5 + 0.5 + 1.5) / 3.0;
        assert_close(geometry.centroid(), (y, x));
    }

    #[test]
    fn test_degenerate_ring_uses_outline() {
        let geometry = LocationGeometry::from_boundary("Line", vec![(0.0, 0.0), (2.0, 2.0), (0.0, 0.0)]);
        assert_close(geometry.centroid(), (1.0, 1.0));
    }

    #[test]
    fn test_empty_ring() {
        let geometry = LocationGeometry::from_boundary("Nothing", vec![]);
        assert_eq!(geometry.centroid(), (0.0, 0.0));
        assert!(geometry.boundary().is_empty());
    }
}
