//! Graceful shutdown handling.

/// Resolves when the process receives Ctrl-C.
///
/// Used by the API server's graceful shutdown and by the dashboard's refresh
/// loop. If the signal handler cannot be installed the future never resolves,
/// leaving the process to be stopped externally.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received"),
        Err(e) => {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
