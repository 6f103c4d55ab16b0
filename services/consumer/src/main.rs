//! consumer-service - supplier 服务前的无状态 HTTP 代理

mod api;
mod client;
mod config;
mod dto;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mall_telemetry::init_tracing;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{AppState, api_routes};
use crate::client::SupplierClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = config::ConsumerServiceConfig::load()?;
    init_tracing(&config.telemetry.log_level);

    let client = SupplierClient::new(
        &config.supplier.base_url,
        Duration::from_secs(config.supplier.request_timeout_secs),
    );
    info!(base_url = %config.supplier.base_url, "Supplier client configured");

    let state = AppState { client: Arc::new(client) };

    let app = api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting consumer service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
