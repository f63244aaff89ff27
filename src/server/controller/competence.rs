use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::competence::{CompetenceDto, CreateCompetenceDto, UpdateCompetenceDto},
    server::{
        error::AppError,
        model::competence::{Competence, CreateCompetenceParam, UpdateCompetenceParam},
        service::competence::CompetenceService,
        state::AppState,
    },
};

pub static COMPETENCE_TAG: &str = "Competence";

#[utoipa::path(
    get,
    path = "/api/Competence",
    tag = COMPETENCE_TAG,
    responses(
        (status = 200, description = "All competences ordered by name", body = Vec<CompetenceDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_competences(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let competences = CompetenceService::new(&state.db).get_all().await?;

    let dtos: Vec<CompetenceDto> = competences.into_iter().map(Competence::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/Competence/{id}",
    tag = COMPETENCE_TAG,
    params(
        ("id" = i32, Path, description = "Competence ID")
    ),
    responses(
        (status = 200, description = "The competence", body = CompetenceDto),
        (status = 404, description = "Competence not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_competence(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let competence = CompetenceService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fail: Find competence with id {}", id)))?;

    Ok((StatusCode::OK, Json(competence.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/Competence",
    tag = COMPETENCE_TAG,
    request_body = CreateCompetenceDto,
    responses(
        (status = 201, description = "ID of the created competence", body = i32),
        (status = 500, description = "Failed to create the competence", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_competence(
    State(state): State<AppState>,
    Json(payload): Json<CreateCompetenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let competence = CompetenceService::new(&state.db)
        .create(CreateCompetenceParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create competence"))?;

    Ok((StatusCode::CREATED, Json(competence.id)))
}

#[utoipa::path(
    put,
    path = "/api/Competence",
    tag = COMPETENCE_TAG,
    request_body = UpdateCompetenceDto,
    responses(
        (status = 200, description = "ID of the updated competence", body = i32),
        (status = 404, description = "Competence not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to update the competence", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_competence(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCompetenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let competence = CompetenceService::new(&state.db)
        .update(UpdateCompetenceParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Update competence"))?
        .ok_or_else(|| AppError::NotFound("Fail: Find competence to update".to_string()))?;

    Ok((StatusCode::OK, Json(competence.id)))
}

#[utoipa::path(
    get,
    path = "/api/Competence/ByTeacher/{teacher_id}",
    tag = COMPETENCE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID")
    ),
    responses(
        (status = 200, description = "Competences held by the teacher", body = Vec<CompetenceDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_competences_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let competences = CompetenceService::new(&state.db)
        .get_by_teacher(&teacher_id)
        .await?;

    let dtos: Vec<CompetenceDto> = competences.into_iter().map(Competence::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    delete,
    path = "/api/Competence/{id}",
    tag = COMPETENCE_TAG,
    params(
        ("id" = i32, Path, description = "Competence ID")
    ),
    responses(
        (status = 204, description = "Competence deleted"),
        (status = 404, description = "Competence not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the competence", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_competence(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = CompetenceService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete competence"))?;

    if !deleted {
        return Err(AppError::NotFound("Fail: Find competence to delete".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
