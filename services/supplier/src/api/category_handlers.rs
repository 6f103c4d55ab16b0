//! 分类 HTTP handlers

use axum::Json;
use axum::extract::{Path, State};
use http::StatusCode;
use mall_common::CategoryId;
use mall_errors::{AppError, AppResult};

use super::dto::{CategoryDto, to_category_dtos};
use super::routes::AppState;

pub async fn create_category(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> AppResult<(StatusCode, Json<CategoryDto>)> {
    dto.validate()?;
    let category = state
        .categories
        .create_category(dto.supplied_id(), dto.name)
        .await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn get_all_categories(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryDto>>> {
    let categories = state.categories.get_all_categories().await?;
    Ok(Json(to_category_dtos(categories)))
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CategoryDto>> {
    let category = state
        .categories
        .get_category_by_id(CategoryId(id))
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category with id {} not found", id)))?;
    Ok(Json(category.into()))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<CategoryDto>,
) -> AppResult<Json<CategoryDto>> {
    dto.validate()?;
    let category = state
        .categories
        .update_category(CategoryId(id), dto.name)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Category with id {} not found", id)))?;
    Ok(Json(category.into()))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.categories.delete_category(CategoryId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
