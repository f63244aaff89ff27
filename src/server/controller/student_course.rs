use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::student_course::{
        CreateStudentCourseDto, StudentCourseDto, StudentCourseKeyDto, UpdateStudentCourseDto,
    },
    server::{
        error::AppError,
        model::student_course::{
            CreateStudentCourseParam, StudentCourse, UpdateStudentCourseParam,
        },
        service::student_course::StudentCourseService,
        state::AppState,
    },
};

pub static STUDENT_COURSE_TAG: &str = "StudentCourse";

fn into_dtos(enrollments: Vec<StudentCourse>) -> Vec<StudentCourseDto> {
    enrollments
        .into_iter()
        .map(StudentCourse::into_dto)
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/StudentCourse",
    tag = STUDENT_COURSE_TAG,
    responses(
        (status = 200, description = "All enrollments", body = Vec<StudentCourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_student_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let enrollments = StudentCourseService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(enrollments))))
}

#[utoipa::path(
    get,
    path = "/api/StudentCourse/ByStudent/{student_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("student_id" = String, Path, description = "Student user ID")
    ),
    responses(
        (status = 200, description = "Enrollments of the student", body = Vec<StudentCourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_student_courses_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let enrollments = StudentCourseService::new(&state.db)
        .get_by_student(&student_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(enrollments))))
}

#[utoipa::path(
    get,
    path = "/api/StudentCourse/ByCourse/{course_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Enrollments in the course", body = Vec<StudentCourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_student_courses_by_course(
    State(state): State<AppState>,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let enrollments = StudentCourseService::new(&state.db)
        .get_by_course(course_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(enrollments))))
}

#[utoipa::path(
    get,
    path = "/api/StudentCourse/{student_id}/{course_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("student_id" = String, Path, description = "Student user ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The enrollment", body = StudentCourseDto),
        (status = 404, description = "Enrollment not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_student_course(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let enrollment = StudentCourseService::new(&state.db)
        .get_by_key(&student_id, course_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Fail: Find studentCourse with studentId {} and courseId {}",
                student_id, course_id
            ))
        })?;

    Ok((StatusCode::OK, Json(enrollment.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/StudentCourse",
    tag = STUDENT_COURSE_TAG,
    request_body = CreateStudentCourseDto,
    responses(
        (status = 201, description = "Key of the created enrollment", body = StudentCourseKeyDto),
        (status = 500, description = "Failed to create the enrollment", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_student_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let key = StudentCourseService::new(&state.db)
        .create(CreateStudentCourseParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create studentCourse"))?;

    Ok((StatusCode::CREATED, Json(key.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/StudentCourse",
    tag = STUDENT_COURSE_TAG,
    request_body = UpdateStudentCourseDto,
    responses(
        (status = 200, description = "Key of the updated enrollment", body = StudentCourseKeyDto),
        (status = 404, description = "Enrollment not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to update the enrollment", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_student_course(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStudentCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let key = StudentCourseService::new(&state.db)
        .update(UpdateStudentCourseParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Update studentCourse"))?
        .ok_or_else(|| AppError::NotFound("Fail: Find studentCourse to update".to_string()))?;

    Ok((StatusCode::OK, Json(key.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/StudentCourse/{student_id}/{course_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("student_id" = String, Path, description = "Student user ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Enrollment deleted"),
        (status = 404, description = "Enrollment not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the enrollment", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_student_course(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = StudentCourseService::new(&state.db)
        .delete(&student_id, course_id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete studentCourse"))?;

    if !deleted {
        return Err(AppError::NotFound(
            "Fail: Find studentCourse to delete".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}
