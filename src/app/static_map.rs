//! Static map stage: one geocoding call, two demo points, one HTML file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::demo::demo_points;
use crate::config::{Config, SOURCE_MANUAL};
use crate::geo::GeometryLoader;
use crate::initialization::init_client;
use crate::map::{build_map, records_to_points};
use crate::store::LocationStore;

/// What the static map stage produced.
#[derive(Debug, Clone)]
pub struct StaticMapReport {
    /// File the map was written to
    pub output: PathBuf,
    /// Place name the polygon was resolved from
    pub location_name: String,
    /// Markers drawn
    pub points: usize,
}

/// Resolves the campus, stores the demo points and writes the map to `output`.
///
/// # Errors
///
/// Fails if the HTTP client cannot be built, the geocoder cannot resolve
/// `config.location_name`, or the file cannot be written.
pub async fn render_static_map(config: &Config, output: &Path) -> Result<StaticMapReport> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let loader = GeometryLoader::new(client, config.geocoder_url.clone());

    let geometry = loader
        .load(&config.location_name)
        .await
        .with_context(|| format!("Failed to resolve geometry for '{}'", config.location_name))?;

    let store = LocationStore::new(config.history_limit);
    store.bulk_add(demo_points(SOURCE_MANUAL)?);
    let records = store.snapshot();

    let doc = build_map(&geometry, records_to_points(&records), config.map_zoom);
    doc.save(output)?;
    log::info!("Map written to {}", output.display());

    Ok(StaticMapReport {
        output: output.to_path_buf(),
        location_name: geometry.name().to_string(),
        points: doc.marker_count(),
    })
}
