//! 分类代理 handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use http::StatusCode;
use mall_common::PageParams;
use mall_errors::AppResult;

use crate::dto::CategoryDto;

use super::routes::{AppState, validated};

pub async fn create_category(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> AppResult<(StatusCode, Json<CategoryDto>)> {
    let created = state.client.create_category(&dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_all_categories(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Vec<CategoryDto>>> {
    let params = validated(params)?;
    let categories = state.client.get_all_categories().await?;
    Ok(Json(params.slice(categories)))
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CategoryDto>> {
    Ok(Json(state.client.get_category_by_id(id).await?))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<CategoryDto>,
) -> AppResult<Json<CategoryDto>> {
    Ok(Json(state.client.update_category(id, &dto).await?))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.client.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
