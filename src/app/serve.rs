//! API stage: resolve the campus once, then serve the store over HTTP.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::demo::demo_points;
use crate::config::{Config, SOURCE_SEED};
use crate::geo::GeometryLoader;
use crate::initialization::init_client;
use crate::server::{start_server, AppState};
use crate::store::LocationStore;

/// Listener and startup options for the API server.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Seed the demo points before accepting requests
    pub seed: bool,
}

/// Builds the shared state: geometry, store and seed points.
///
/// Geometry resolution failure is fatal; the server never starts without a
/// campus polygon.
pub async fn prepare_state(config: &Config, seed: bool) -> Result<AppState> {
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let loader = GeometryLoader::new(client, config.geocoder_url.clone());

    let geometry = loader
        .load(&config.location_name)
        .await
        .with_context(|| format!("Failed to resolve geometry for '{}'", config.location_name))?;
    let (lat, lon) = geometry.centroid();
    log::info!(
        "Resolved '{}' ({} boundary vertices, centroid {:.5}, {:.5})",
        geometry.name(),
        geometry.boundary().len(),
        lat,
        lon
    );

    let store = Arc::new(LocationStore::new(config.history_limit));
    if seed {
        store.bulk_add(demo_points(SOURCE_SEED)?);
        log::info!("Seeded {} demo points", store.len());
    }

    Ok(AppState::new(store, geometry, config.map_zoom))
}

/// Runs the API server until Ctrl-C.
pub async fn run_server(config: &Config, options: &ServeOptions) -> Result<()> {
    let state = prepare_state(config, options.seed).await?;
    start_server(&options.host, options.port, state).await
}
