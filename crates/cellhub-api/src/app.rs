//! Server bootstrap — binds the listener and runs the router until
//! shutdown.

use cellhub_core::error::AppError;
use cellhub_core::result::AppResult;

use crate::router::build_router;
use crate::state::AppState;

/// Run the CellHub server with the given state until Ctrl+C.
pub async fn serve(state: AppState) -> AppResult<()> {
    let addr = state.config.server.bind_addr();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("CellHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
    }
}
