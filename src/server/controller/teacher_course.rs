use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::teacher_course::{TeacherCourseDto, TeacherCourseKeyDto},
    server::{
        error::AppError,
        model::teacher_course::{TeacherCourse, TeacherCourseKey},
        service::teacher_course::TeacherCourseService,
        state::AppState,
    },
};

pub static TEACHER_COURSE_TAG: &str = "TeacherCourse";

fn into_dtos(assignments: Vec<TeacherCourse>) -> Vec<TeacherCourseDto> {
    assignments
        .into_iter()
        .map(TeacherCourse::into_dto)
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/TeacherCourse",
    tag = TEACHER_COURSE_TAG,
    responses(
        (status = 200, description = "All teaching assignments", body = Vec<TeacherCourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_teacher_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = TeacherCourseService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(assignments))))
}

#[utoipa::path(
    get,
    path = "/api/TeacherCourse/ByTeacher/{teacher_id}",
    tag = TEACHER_COURSE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID")
    ),
    responses(
        (status = 200, description = "Assignments of the teacher", body = Vec<TeacherCourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teacher_courses_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = TeacherCourseService::new(&state.db)
        .get_by_teacher(&teacher_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(assignments))))
}

#[utoipa::path(
    get,
    path = "/api/TeacherCourse/ByCourse/{course_id}",
    tag = TEACHER_COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Assignments for the course", body = Vec<TeacherCourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teacher_courses_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let assignments = TeacherCourseService::new(&state.db)
        .get_by_course(course_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(assignments))))
}

#[utoipa::path(
    get,
    path = "/api/TeacherCourse/{teacher_id}/{course_id}",
    tag = TEACHER_COURSE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The teaching assignment", body = TeacherCourseDto),
        (status = 404, description = "Assignment not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_teacher_course(
    State(state): State<AppState>,
    Path((teacher_id, course_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let assignment = TeacherCourseService::new(&state.db)
        .get_by_key(&teacher_id, course_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Fail: Find teacherCourse with teacherId {} and courseId {}",
                teacher_id, course_id
            ))
        })?;

    Ok((StatusCode::OK, Json(assignment.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/TeacherCourse",
    tag = TEACHER_COURSE_TAG,
    request_body = TeacherCourseKeyDto,
    responses(
        (status = 201, description = "Key of the created assignment", body = TeacherCourseKeyDto),
        (status = 500, description = "Failed to create the assignment", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_teacher_course(
    State(state): State<AppState>,
    Json(payload): Json<TeacherCourseKeyDto>,
) -> Result<impl IntoResponse, AppError> {
    let key = TeacherCourseService::new(&state.db)
        .create(TeacherCourseKey::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create teacherCourse"))?;

    Ok((StatusCode::CREATED, Json(key.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/TeacherCourse/{teacher_id}/{course_id}",
    tag = TEACHER_COURSE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the assignment", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_teacher_course(
    State(state): State<AppState>,
    Path((teacher_id, course_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = TeacherCourseService::new(&state.db)
        .delete(&teacher_id, course_id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete teacherCourse"))?;

    if !deleted {
        return Err(AppError::NotFound(
            "Fail: Find teacherCourse to delete".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
