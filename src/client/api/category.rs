use crate::{
    client::model::error::ApiError,
    model::category::{CategoryDto, CreateCategoryDto},
};

use super::helper::{
    api_url, delete, get, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_categories() -> Result<Vec<CategoryDto>, ApiError> {
    let response = send_request(get(&api_url("Category"))).await?;
    parse_response(response).await
}

/// Creates a category and returns its id
pub async fn create_category(name: String) -> Result<i32, ApiError> {
    let body = serialize_json(&CreateCategoryDto { name })?;

    let response = send_request(post(&api_url("Category")).body(body)).await?;
    parse_response(response).await
}

/// Deletes a category together with its courses
pub async fn delete_category(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&api_url(&format!("Category/{}", id)))).await?;
    parse_empty_response(response).await
}
