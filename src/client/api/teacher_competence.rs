use crate::{client::model::error::ApiError, model::teacher_competence::TeacherCompetenceKeyDto};

use super::helper::{
    api_url, delete, parse_empty_response, parse_response, post, send_request, serialize_json,
};

pub async fn add_teacher_competence(
    teacher_id: String,
    competence_id: i32,
) -> Result<TeacherCompetenceKeyDto, ApiError> {
    let body = serialize_json(&TeacherCompetenceKeyDto {
        teacher_id,
        competence_id,
    })?;

    let response = send_request(post(&api_url("TeacherCompetence")).body(body)).await?;
    parse_response(response).await
}

pub async fn remove_teacher_competence(
    teacher_id: &str,
    competence_id: i32,
) -> Result<(), ApiError> {
    let url = api_url(&format!("TeacherCompetence/{}/{}", teacher_id, competence_id));

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
