//! HTTP API for the location tracker.
//!
//! Endpoints:
//! - `GET /locations` - points, optionally bounded by `start`/`end`
//! - `POST /locations` - record a new point
//! - `GET /map` - HTML map for the same optional bounds
//! - `POST /reset` - drop every point
//! - `GET /health` - liveness and point count

mod extract;
mod handlers;
mod request_log;
mod state;
mod types;

use axum::routing::{get, post};
use axum::Router;

use handlers::{create_location, health_handler, list_locations, map_handler, reset_handler};
pub use extract::{ApiJson, ApiQuery};
pub use state::AppState;
pub use types::{parse_timestamp, ApiError, HealthResponse, LocationIn, LocationOut, TimeRange};

/// Builds the router with every endpoint wired to `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/locations", get(list_locations).post(create_location))
        .route("/map", get(map_handler))
        .route("/reset", post(reset_handler))
        .route("/health", get(health_handler))
        .layer(axum::middleware::from_fn(request_log::log_request))
        .with_state(state)
}

/// Binds `host:port` and serves the API until Ctrl-C.
pub async fn start_server(host: &str, port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", host, port, e))?;

    log::info!("API server listening on http://{}:{}/", host, port);
    log::info!("  - Points: http://{}:{}/locations", host, port);
    log::info!("  - Map: http://{}:{}/map", host, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(crate::app::shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}
