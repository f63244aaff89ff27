use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::app_user::{AppUserDto, CreateAppUserDto, UpdateAppUserDto},
    server::{
        error::AppError,
        model::app_user::{AppUser, CreateAppUserParam, UpdateAppUserParam},
        service::app_user::AppUserService,
        state::AppState,
    },
};

pub static APP_USER_TAG: &str = "AppUser";

fn into_dtos(users: Vec<AppUser>) -> Vec<AppUserDto> {
    users.into_iter().map(AppUser::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/AppUser",
    tag = APP_USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<AppUserDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = AppUserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(users))))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/Students",
    tag = APP_USER_TAG,
    responses(
        (status = 200, description = "Users holding the Student role", body = Vec<AppUserDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = AppUserService::new(&state.db).get_students().await?;

    Ok((StatusCode::OK, Json(into_dtos(users))))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/Teachers",
    tag = APP_USER_TAG,
    responses(
        (status = 200, description = "Users holding the Teacher role", body = Vec<AppUserDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teachers(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = AppUserService::new(&state.db).get_teachers().await?;

    Ok((StatusCode::OK, Json(into_dtos(users))))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/{id}",
    tag = APP_USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = AppUserDto),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AppUserService::new(&state.db)
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fail: Find appUser with id {}", id)))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/StudentsByCourse/{course_id}",
    tag = APP_USER_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Students enrolled in the course", body = Vec<AppUserDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_students_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = AppUserService::new(&state.db)
        .get_students_by_course(course_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(users))))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/TeachersByCourse/{course_id}",
    tag = APP_USER_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Teachers assigned to the course", body = Vec<AppUserDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teachers_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = AppUserService::new(&state.db)
        .get_teachers_by_course(course_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(users))))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/TeachersByCompetence/{competence_id}",
    tag = APP_USER_TAG,
    params(
        ("competence_id" = i32, Path, description = "Competence ID")
    ),
    responses(
        (status = 200, description = "Teachers holding the competence", body = Vec<AppUserDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teachers_by_competence(
    State(state): State<AppState>,
    Path(competence_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = AppUserService::new(&state.db)
        .get_teachers_by_competence(competence_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(users))))
}

#[utoipa::path(
    get,
    path = "/api/AppUser/RoleNamesByAppUser/{user_id}",
    tag = APP_USER_TAG,
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Names of the roles the user holds", body = Vec<String>),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_role_names(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let role_names = AppUserService::new(&state.db)
        .get_role_names(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fail: Find appUser with id {}", user_id)))?;

    Ok((StatusCode::OK, Json(role_names)))
}

#[utoipa::path(
    post,
    path = "/api/AppUser",
    tag = APP_USER_TAG,
    request_body = CreateAppUserDto,
    responses(
        (status = 201, description = "ID of the created user", body = String),
        (status = 500, description = "Failed to create the user", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateAppUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AppUserService::new(&state.db)
        .create(CreateAppUserParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create appUser"))?;

    Ok((StatusCode::CREATED, Json(user.id)))
}

#[utoipa::path(
    put,
    path = "/api/AppUser",
    tag = APP_USER_TAG,
    request_body = UpdateAppUserDto,
    responses(
        (status = 200, description = "ID of the updated user", body = String),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to update the user", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UpdateAppUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AppUserService::new(&state.db)
        .update(UpdateAppUserParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Update appUser"))?
        .ok_or_else(|| AppError::NotFound("Fail: Find appUser to update".to_string()))?;

    Ok((StatusCode::OK, Json(user.id)))
}

#[utoipa::path(
    delete,
    path = "/api/AppUser/{id}",
    tag = APP_USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the user", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = AppUserService::new(&state.db)
        .delete(&id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete appUser"))?;

    if !deleted {
        return Err(AppError::NotFound("Fail: Find appUser to delete".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
