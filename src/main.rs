use postbox::config::AppConfig;
use postbox::relay::service::RelayReceiver;
use postbox::store::records::RecordStore;
use postbox::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::default();

    // 1. Record store:
    let store = RecordStore::new(&config.storage_file);
    store.init().await?;
    tracing::info!("Record store at {}", config.storage_file.display());

    // 2. Relay receiver (UDP):
    let receiver =
        RelayReceiver::bind(config.relay_addr, store, config.max_datagram_bytes).await?;
    tracing::info!("Relay receiver listening on {}", config.relay_addr);

    let relay_handle = tokio::spawn(async move {
        if let Err(e) = receiver.run().await {
            tracing::error!("Relay receiver terminated: {}", e);
        }
    });

    // 3. HTTP server:
    let app = web::handlers::router(config.clone());
    let listener = tokio::net::TcpListener::bind(config.http_addr).await?;
    tracing::info!("HTTP server listening on {}", config.http_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The receiver watches for the same interrupt and exits on its own.
    let _ = relay_handle.await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
