//! supplier-service - 分类/商品数据的所有者服务

mod api;
mod application;
mod config;
mod domain;
mod infrastructure;

use std::net::SocketAddr;
use std::sync::Arc;

use mall_adapter_postgres::{PostgresConfig, create_pool};
use mall_telemetry::init_tracing;
use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{AppState, api_routes};
use crate::application::{CategoryService, ProductService};
use crate::infrastructure::persistence::{PostgresCategoryRepository, PostgresProductRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = config::SupplierServiceConfig::load()?;
    init_tracing(&config.telemetry.log_level);

    let pg_config = PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections);
    let pool = create_pool(&pg_config).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied");

    let category_repo = Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let product_repo = Arc::new(PostgresProductRepository::new(pool.clone()));

    let state = AppState {
        categories: Arc::new(CategoryService::new(category_repo.clone())),
        products: Arc::new(ProductService::new(product_repo, category_repo)),
        pool,
    };

    let app = api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting supplier service");

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
