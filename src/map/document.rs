//! Map document model.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{
    DEFAULT_MARKER_PREFIX, PATH_COLOR, PATH_WEIGHT, POLYGON_COLOR, POLYGON_FILL_OPACITY,
};
use crate::geo::LocationGeometry;
use crate::store::LocationRecord;

/// A point to plot: `(latitude, longitude, label)`.
pub type MapPoint = (f64, f64, String);

/// One drawable element of the map. Coordinates are `(latitude, longitude)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Filled area outline.
    Polygon {
        /// Vertices as `(latitude, longitude)`.
        vertices: Vec<(f64, f64)>,
        /// Stroke and fill color.
        color: &'static str,
        /// Fill opacity in [0, 1].
        fill_opacity: f64,
        /// Popup text.
        popup: String,
    },
    /// Pin with a popup.
    Marker {
        /// Position as `(latitude, longitude)`.
        position: (f64, f64),
        /// Popup text.
        popup: String,
    },
    /// Connected path.
    PolyLine {
        /// Vertices as `(latitude, longitude)`.
        vertices: Vec<(f64, f64)>,
        /// Stroke color.
        color: &'static str,
        /// Stroke width in pixels.
        weight: f64,
    },
}

/// A renderable map: a view plus the layers drawn on it, bottom first.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    /// Page title.
    pub title: String,
    /// Initial view center as `(latitude, longitude)`.
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u8,
    /// Layers in drawing order.
    pub layers: Vec<Layer>,
}

impl MapDocument {
    /// Number of marker layers.
    pub fn marker_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| matches!(layer, Layer::Marker { .. }))
            .count()
    }

    /// True when the document contains a connecting path.
    pub fn has_path(&self) -> bool {
        self.layers
            .iter()
            .any(|layer| matches!(layer, Layer::PolyLine { .. }))
    }

    /// Renders the document as a standalone HTML page.
    pub fn render_html(&self) -> String {
        super::html::render(self)
    }

    /// Writes the rendered page to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render_html())
            .with_context(|| format!("Failed to write map to {}", path.display()))
    }
}

/// Builds the map for a campus geometry and an ordered list of points.
///
/// Markers without a label are titled `Punto N`, N being the 1-based position
/// in `points`. The path is drawn only for two or more points.
pub fn build_map<I>(geometry: &LocationGeometry, points: I, zoom: u8) -> MapDocument
where
    I: IntoIterator<Item = MapPoint>,
{
    let mut layers = vec![Layer::Polygon {
        vertices: geometry
            .boundary()
            .iter()
            .map(|&(lon, lat)| (lat, lon))
            .collect(),
        color: POLYGON_COLOR,
        fill_opacity: POLYGON_FILL_OPACITY,
        popup: geometry.name().to_string(),
    }];

    let mut path = Vec::new();
    for (index, (lat, lon, label)) in points.into_iter().enumerate() {
        let popup = if label.is_empty() {
            format!("{} {}", DEFAULT_MARKER_PREFIX, index + 1)
        } else {
            label
        };
        layers.push(Layer::Marker {
            position: (lat, lon),
            popup,
        });
        path.push((lat, lon));
    }

    if path.len() > 1 {
        layers.push(Layer::PolyLine {
            vertices: path,
            color: PATH_COLOR,
            weight: PATH_WEIGHT,
        });
    }

    MapDocument {
        title: geometry.name().to_string(),
        center: geometry.centroid(),
        zoom,
        layers,
    }
}

/// Converts store records into map points, preserving order.
pub fn records_to_points(records: &[LocationRecord]) -> impl Iterator<Item = MapPoint> + '_ {
    records
        .iter()
        .map(|r| (r.latitude(), r.longitude(), r.label().to_string()))
}
