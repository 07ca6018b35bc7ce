//! HTTP boundary: binds the listener and serves the invoice router until
//! Ctrl-C.

mod error;
mod routes;

use routes::invoice_router;

use tokio::net::TcpListener;

use fakt_core::{ExpenseGateway, ServerConfig};

/// Serve `POST /invoice` on the configured address.
pub async fn serve<G: ExpenseGateway>(config: &ServerConfig, gateway: G) -> anyhow::Result<()> {
    let app = invoice_router(gateway, config.max_upload_bytes);

    let listener = TcpListener::bind(config.bind_addr.as_str())
        .await
        .map_err(|e| anyhow::anyhow!("Cannot bind {}: {}", config.bind_addr, e))?;

    tracing::info!(addr = %listener.local_addr()?, "Invoice service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Invoice service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
