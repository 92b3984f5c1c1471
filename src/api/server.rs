use anyhow::{Context, Result};
use tokio::net::TcpListener;

use super::{create_router, AppState};
use crate::config::ServerConfig;
use crate::constants::{LOG_SERVER_LISTENING, LOG_SHUTDOWN};

/// Bind the configured address and serve the API until Ctrl-C.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    log::info!("{} {}", LOG_SERVER_LISTENING, address);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("{}", LOG_SHUTDOWN);
}
