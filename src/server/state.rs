//! Shared server state.

use std::sync::Arc;

use crate::geo::LocationGeometry;
use crate::store::LocationStore;

/// Application context built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The point store.
    pub store: Arc<LocationStore>,
    /// Campus geometry, resolved before the server starts.
    pub geometry: Arc<LocationGeometry>,
    /// Zoom level for rendered maps.
    pub map_zoom: u8,
}

impl AppState {
    /// Bundles the store, geometry and zoom into a state value.
    pub fn new(store: Arc<LocationStore>, geometry: Arc<LocationGeometry>, map_zoom: u8) -> Self {
        Self {
            store,
            geometry,
            map_zoom,
        }
    }
}
