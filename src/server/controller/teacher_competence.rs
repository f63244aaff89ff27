use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::teacher_competence::{TeacherCompetenceDto, TeacherCompetenceKeyDto},
    server::{
        error::AppError,
        model::teacher_competence::{TeacherCompetence, TeacherCompetenceKey},
        service::teacher_competence::TeacherCompetenceService,
        state::AppState,
    },
};

pub static TEACHER_COMPETENCE_TAG: &str = "TeacherCompetence";

fn into_dtos(competences: Vec<TeacherCompetence>) -> Vec<TeacherCompetenceDto> {
    competences
        .into_iter()
        .map(TeacherCompetence::into_dto)
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/TeacherCompetence",
    tag = TEACHER_COMPETENCE_TAG,
    responses(
        (status = 200, description = "All teacher competences", body = Vec<TeacherCompetenceDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_teacher_competences(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let competences = TeacherCompetenceService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(competences))))
}

#[utoipa::path(
    get,
    path = "/api/TeacherCompetence/ByTeacher/{teacher_id}",
    tag = TEACHER_COMPETENCE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID")
    ),
    responses(
        (status = 200, description = "Competences of the teacher", body = Vec<TeacherCompetenceDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teacher_competences_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let competences = TeacherCompetenceService::new(&state.db)
        .get_by_teacher(&teacher_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(competences))))
}

#[utoipa::path(
    get,
    path = "/api/TeacherCompetence/ByCompetence/{competence_id}",
    tag = TEACHER_COMPETENCE_TAG,
    params(
        ("competence_id" = i32, Path, description = "Competence ID")
    ),
    responses(
        (status = 200, description = "Teachers holding the competence", body = Vec<TeacherCompetenceDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teacher_competences_by_competence(
    State(state): State<AppState>,
    Path(competence_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let competences = TeacherCompetenceService::new(&state.db)
        .get_by_competence(competence_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(competences))))
}

#[utoipa::path(
    get,
    path = "/api/TeacherCompetence/{teacher_id}/{competence_id}",
    tag = TEACHER_COMPETENCE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID"),
        ("competence_id" = i32, Path, description = "Competence ID")
    ),
    responses(
        (status = 200, description = "The teacher competence", body = TeacherCompetenceDto),
        (status = 404, description = "Teacher competence not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teacher_competence(
    State(state): State<AppState>,
    Path((teacher_id, competence_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let competence = TeacherCompetenceService::new(&state.db)
        .get_by_key(&teacher_id, competence_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Fail: Find teacherCompetence with teacherId {} and competenceId {}",
                teacher_id, competence_id
            ))
        })?;

    Ok((StatusCode::OK, Json(competence.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/TeacherCompetence",
    tag = TEACHER_COMPETENCE_TAG,
    request_body = TeacherCompetenceKeyDto,
    responses(
        (status = 201, description = "Key of the created teacher competence", body = TeacherCompetenceKeyDto),
        (status = 500, description = "Failed to create the teacher competence", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_teacher_competence(
    State(state): State<AppState>,
    Json(payload): Json<TeacherCompetenceKeyDto>,
) -> Result<impl IntoResponse, AppError> {
    let key = TeacherCompetenceService::new(&state.db)
        .create(TeacherCompetenceKey::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create teacherCompetence"))?;

    Ok((StatusCode::CREATED, Json(key.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/TeacherCompetence/{teacher_id}/{competence_id}",
    tag = TEACHER_COMPETENCE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID"),
        ("competence_id" = i32, Path, description = "Competence ID")
    ),
    responses(
        (status = 204, description = "Teacher competence deleted"),
        (status = 404, description = "Teacher competence not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the teacher competence", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_teacher_competence(
    State(state): State<AppState>,
    Path((teacher_id, competence_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = TeacherCompetenceService::new(&state.db)
        .delete(&teacher_id, competence_id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete teacherCompetence"))?;

    if !deleted {
        return Err(AppError::NotFound(
            "Fail: Find teacherCompetence to delete".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
