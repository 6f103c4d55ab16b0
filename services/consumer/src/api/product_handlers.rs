//! 商品代理 handlers
//!
//! 列表端点从 supplier 取完整结果集后在本层应用 page/size 切片；
//! 这是整个系统里唯一发生分页的地方。

use axum::Json;
use axum::extract::{Path, Query, State};
use http::StatusCode;
use mall_common::{PageParams, default_page_size};
use mall_errors::AppResult;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::dto::ProductDto;

use super::routes::{AppState, validated};

// serde_urlencoded 不支持 flatten，page/size 在各查询结构里展开

#[derive(Debug, Deserialize)]
pub struct MinQuery {
    pub min: Decimal,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct MaxQuery {
    pub max: Decimal,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub min: Decimal,
    pub max: Decimal,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub keyword: String,
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub size: usize,
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(dto): Json<ProductDto>,
) -> AppResult<(StatusCode, Json<ProductDto>)> {
    let created = state.client.create_product(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_all_products(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let params = validated(params)?;
    let products = state.client.get_all_products().await?;
    Ok(Json(params.slice(products)))
}

pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductDto>> {
    Ok(Json(state.client.get_product_by_id(id).await?))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ProductDto>,
) -> AppResult<Json<ProductDto>> {
    Ok(Json(state.client.update_product(id, &dto).await?))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.client.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn filter_by_price_greater(
    State(state): State<AppState>,
    Query(query): Query<MinQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let page = validated(PageParams::new(query.page, query.size))?;
    let products = state.client.filter_by_price_greater(query.min).await?;
    Ok(Json(page.slice(products)))
}

pub async fn filter_by_price_less(
    State(state): State<AppState>,
    Query(query): Query<MaxQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let page = validated(PageParams::new(query.page, query.size))?;
    let products = state.client.filter_by_price_less(query.max).await?;
    Ok(Json(page.slice(products)))
}

pub async fn filter_by_price_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let page = validated(PageParams::new(query.page, query.size))?;
    let products = state
        .client
        .filter_by_price_range(query.min, query.max)
        .await?;
    Ok(Json(page.slice(products)))
}

pub async fn search_by_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let params = validated(params)?;
    let products = state.client.search_by_category(id).await?;
    Ok(Json(params.slice(products)))
}

pub async fn search_by_name(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let page = validated(PageParams::new(query.page, query.size))?;
    let products = state.client.search_by_name(&query.keyword).await?;
    Ok(Json(page.slice(products)))
}

pub async fn search_by_name_not_containing(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let page = validated(PageParams::new(query.page, query.size))?;
    let products = state
        .client
        .search_by_name_not_containing(&query.keyword)
        .await?;
    Ok(Json(page.slice(products)))
}

pub async fn search_by_description(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let page = validated(PageParams::new(query.page, query.size))?;
    let products = state.client.search_by_description(&query.keyword).await?;
    Ok(Json(page.slice(products)))
}
