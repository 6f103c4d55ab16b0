//! API 路由

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sqlx::PgPool;

use crate::application::{CategoryService, ProductService};

use super::{category_handlers, product_handlers};

#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
    pub pool: PgPool,
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/categories",
            get(category_handlers::get_all_categories).post(category_handlers::create_category),
        )
        .route(
            "/categories/{id}",
            get(category_handlers::get_category_by_id)
                .put(category_handlers::update_category)
                .delete(category_handlers::delete_category),
        )
        .route(
            "/products",
            get(product_handlers::get_all_products).post(product_handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(product_handlers::get_product_by_id)
                .put(product_handlers::update_product)
                .delete(product_handlers::delete_product),
        )
        .route(
            "/products/price/greater/",
            get(product_handlers::filter_by_price_greater),
        )
        .route(
            "/products/price/less/",
            get(product_handlers::filter_by_price_less),
        )
        .route(
            "/products/price/range/",
            get(product_handlers::filter_by_price_range),
        )
        .route(
            "/products/search/category/{id}",
            get(product_handlers::search_by_category),
        )
        .route(
            "/products/search/name/",
            get(product_handlers::search_by_name),
        )
        .route(
            "/products/search/name/not-containing/",
            get(product_handlers::search_by_name_not_containing),
        )
        .route(
            "/products/search/description/",
            get(product_handlers::search_by_description),
        )
        .route("/health", get(health_check))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check(
    State(state): State<AppState>,
) -> Json<HealthResponse> {
    let status = match mall_adapter_postgres::check_connection(&state.pool).await {
        Ok(()) => "healthy",
        Err(_) => "degraded",
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
