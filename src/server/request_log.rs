//! Per-request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status and latency of every request.
pub(super) async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    if status.is_client_error() || status.is_server_error() {
        log::warn!("{} {} -> {} ({:.1} ms)", method, path, status.as_u16(), elapsed_ms);
    } else {
        log::debug!("{} {} -> {} ({:.1} ms)", method, path, status.as_u16(), elapsed_ms);
    }
    response
}
