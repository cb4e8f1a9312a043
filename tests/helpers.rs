// Shared test helpers for spinning up the API.
//
// Each test gets its own store and its own server on an ephemeral port.

use std::net::SocketAddr;
use std::sync::Arc;

use campus_tracker::{build_router, AppState, LocationGeometry, LocationStore};

/// A square campus around the default manual coordinates.
pub fn test_geometry() -> LocationGeometry {
    LocationGeometry::from_boundary(
        "Test Campus",
        vec![
            (-76.531, 3.340),
            (-76.528, 3.340),
            (-76.528, 3.343),
            (-76.531, 3.343),
            (-76.531, 3.340),
        ],
    )
}

/// Starts the API on `127.0.0.1:0` and returns its address and store.
#[allow(dead_code)] // Not every test file uses the store handle
pub async fn spawn_api(history_limit: Option<usize>) -> (SocketAddr, Arc<LocationStore>) {
    let store = Arc::new(LocationStore::new(history_limit));
    let state = AppState::new(Arc::clone(&store), Arc::new(test_geometry()), 17);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("Test server failed");
    });

    (addr, store)
}

/// Base URL for a spawned server.
#[allow(dead_code)]
pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
