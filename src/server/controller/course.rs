use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::course::{CourseDto, CreateCourseDto, UpdateCourseDto},
    server::{
        error::AppError,
        model::course::{Course, CreateCourseParam, UpdateCourseParam},
        service::course::CourseService,
        state::AppState,
    },
};

pub static COURSE_TAG: &str = "Course";

fn into_dtos(courses: Vec<Course>) -> Vec<CourseDto> {
    courses.into_iter().map(Course::into_dto).collect()
}

#[utoipa::path(
    get,
    path = "/api/Course",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses ordered by name", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(courses))))
}

#[utoipa::path(
    get,
    path = "/api/Course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "The course", body = CourseDto),
        (status = 404, description = "Course not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fail: Find course with id {}", id)))?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/Course/ByCategory/{category_id}",
    tag = COURSE_TAG,
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Courses in the category", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_courses_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_by_category(category_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(courses))))
}

#[utoipa::path(
    get,
    path = "/api/Course/ByStudent/{student_id}",
    tag = COURSE_TAG,
    params(
        ("student_id" = String, Path, description = "Student user ID")
    ),
    responses(
        (status = 200, description = "Courses the student is enrolled in", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_courses_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_by_student(&student_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(courses))))
}

#[utoipa::path(
    get,
    path = "/api/Course/ByTeacher/{teacher_id}",
    tag = COURSE_TAG,
    params(
        ("teacher_id" = String, Path, description = "Teacher user ID")
    ),
    responses(
        (status = 200, description = "Courses the teacher is assigned to", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_courses_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db)
        .get_by_teacher(&teacher_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(courses))))
}

#[utoipa::path(
    post,
    path = "/api/Course",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "ID of the created course", body = i32),
        (status = 500, description = "Failed to create the course", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .create(CreateCourseParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create course"))?;

    Ok((StatusCode::CREATED, Json(course.id)))
}

#[utoipa::path(
    put,
    path = "/api/Course",
    tag = COURSE_TAG,
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "ID of the updated course", body = i32),
        (status = 404, description = "Course not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to update the course", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .update(UpdateCourseParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Update course"))?
        .ok_or_else(|| AppError::NotFound("Fail: Find course to update".to_string()))?;

    Ok((StatusCode::OK, Json(course.id)))
}

#[utoipa::path(
    delete,
    path = "/api/Course/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the course", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = CourseService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete course"))?;

    if !deleted {
        return Err(AppError::NotFound("Fail: Find course to delete".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
