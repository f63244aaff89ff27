use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    server::{
        error::AppError,
        model::category::{Category, CreateCategoryParam, UpdateCategoryParam},
        service::category::CategoryService,
        state::AppState,
    },
};

pub static CATEGORY_TAG: &str = "Category";

#[utoipa::path(
    get,
    path = "/api/Category",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "All categories ordered by name", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(Category::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/Category/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fail: Find category with id {}", id)))?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/Category",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "ID of the created category", body = i32),
        (status = 500, description = "Failed to create the category", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create category"))?;

    Ok((StatusCode::CREATED, Json(category.id)))
}

#[utoipa::path(
    put,
    path = "/api/Category",
    tag = CATEGORY_TAG,
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "ID of the updated category", body = i32),
        (status = 404, description = "Category not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to update the category", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = CategoryService::new(&state.db)
        .update(UpdateCategoryParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Update category"))?
        .ok_or_else(|| AppError::NotFound("Fail: Find category to update".to_string()))?;

    Ok((StatusCode::OK, Json(category.id)))
}

#[utoipa::path(
    delete,
    path = "/api/Category/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category and its courses deleted"),
        (status = 404, description = "Category not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the category", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = CategoryService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete category"))?;

    if !deleted {
        return Err(AppError::NotFound("Fail: Find category to delete".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
