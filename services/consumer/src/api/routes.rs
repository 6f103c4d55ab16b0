//! API 路由（与 supplier 的路径形状一致，列表端点额外接受 page/size）

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use mall_common::PageParams;
use mall_errors::{AppError, AppResult};
use serde::Serialize;

use crate::client::SupplierClient;

use super::{category_handlers, product_handlers};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SupplierClient>,
}

/// page/size 校验：size 至少为 1
pub(super) fn validated(params: PageParams) -> AppResult<PageParams> {
    if !params.is_valid() {
        return Err(AppError::validation("size must be at least 1"));
    }
    Ok(params)
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

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
