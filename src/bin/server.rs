use std::sync::Arc;

use anyhow::Context;
use log::{error, info};
use userdb::{backend::JsonStore, server::{self, ServerConfig, SharedStore}};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::default();
    let store = JsonStore::open(&config.data_file);
    let shared: SharedStore = Arc::new(store.clone());

    let listener = tokio::net::TcpListener::bind(config.address())
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;
    info!("Server is running on {}", config.public_url());

    axum::serve(listener, server::router(shared))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "server error")?;

    store.close();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", err);
    }
    info!("shutting down");
}
