//! Inventory server binary entry point

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cloudops_inventory::api::http::{create_router, AppState};
use cloudops_inventory::config::Config;
use cloudops_inventory::service::InventoryService;
use cloudops_inventory::store::Store;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let store = Store::connect(&config.database_url, config.max_connections).await?;
    store.seed_catalog().await?;
    tracing::info!(database = %config.database_url, "database ready");

    let service = InventoryService::new(store);
    let state = Arc::new(AppState::new(service, config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        environment = %config.deployment_env,
        version = %config.app_version,
        "inventory server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
