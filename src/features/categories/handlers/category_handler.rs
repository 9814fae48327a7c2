use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryResponseDto;
use crate::features::reports::models::ReportCategory;
use crate::shared::types::ApiResponse;

/// List all report categories in form order
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories() -> Json<ApiResponse<Vec<CategoryResponseDto>>> {
    let categories: Vec<CategoryResponseDto> =
        ReportCategory::ALL.into_iter().map(|c| c.into()).collect();
    Json(ApiResponse::success(Some(categories), None, None))
}

/// Get category by value
#[utoipa::path(
    get,
    path = "/api/categories/{value}",
    params(
        ("value" = String, Path, description = "Category value, e.g. roads")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    Path(value): Path<String>,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = value
        .parse::<ReportCategory>()
        .map_err(|_| AppError::NotFound(format!("Category {} not found", value)))?;
    Ok(Json(ApiResponse::success(
        Some(category.into()),
        None,
        None,
    )))
}
