use crate::{
    client::model::error::ApiError,
    model::competence::{CompetenceDto, CreateCompetenceDto},
};

use super::helper::{
    api_url, delete, get, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_competences() -> Result<Vec<CompetenceDto>, ApiError> {
    let response = send_request(get(&api_url("Competence"))).await?;
    parse_response(response).await
}

/// Creates a competence and returns its id
pub async fn create_competence(name: String) -> Result<i32, ApiError> {
    let body = serialize_json(&CreateCompetenceDto { name })?;

    let response = send_request(post(&api_url("Competence")).body(body)).await?;
    parse_response(response).await
}

/// Deletes a competence
pub async fn delete_competence(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&api_url(&format!("Competence/{}", id)))).await?;
    parse_empty_response(response).await
}

pub async fn get_competences_by_teacher(teacher_id: &str) -> Result<Vec<CompetenceDto>, ApiError> {
    let url = api_url(&format!("Competence/ByTeacher/{}", teacher_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
