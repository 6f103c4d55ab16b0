//! 商品 HTTP handlers
//!
//! 过滤/搜索端点返回未分页的完整结果集；分页只在 consumer 侧发生。

use axum::Json;
use axum::extract::{Path, Query, State};
use http::StatusCode;
use mall_common::{CategoryId, ProductId};
use mall_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::dto::{ProductDto, to_product_dtos};
use super::routes::AppState;

#[derive(Debug, Deserialize)]
pub struct MinQuery {
    pub min: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct MaxQuery {
    pub max: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub min: Decimal,
    pub max: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub keyword: String,
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(dto): Json<ProductDto>,
) -> AppResult<(StatusCode, Json<ProductDto>)> {
    dto.validate()?;
    let product = state.products.create_product(dto.into_new_product()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

pub async fn get_all_products(State(state): State<AppState>) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.get_all_products().await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ProductDto>> {
    let product = state
        .products
        .get_product_by_id(ProductId(id))
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id {} not found", id)))?;
    Ok(Json(product.into()))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<ProductDto>,
) -> AppResult<Json<ProductDto>> {
    dto.validate()?;
    let product = state
        .products
        .update_product(ProductId(id), dto.name, dto.description, dto.price)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product with id {} not found", id)))?;
    Ok(Json(product.into()))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.products.delete_product(ProductId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn filter_by_price_greater(
    State(state): State<AppState>,
    Query(query): Query<MinQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.filter_by_price_greater(query.min).await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn filter_by_price_less(
    State(state): State<AppState>,
    Query(query): Query<MaxQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.filter_by_price_less(query.max).await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn filter_by_price_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state
        .products
        .filter_by_price_range(query.min, query.max)
        .await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn search_by_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.search_by_category(CategoryId(id)).await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn search_by_name(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.search_by_name(&query.keyword).await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn search_by_name_not_containing(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state
        .products
        .search_by_name_not_containing(&query.keyword)
        .await?;
    Ok(Json(to_product_dtos(products)))
}

pub async fn search_by_description(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = state.products.search_by_description(&query.keyword).await?;
    Ok(Json(to_product_dtos(products)))
}
