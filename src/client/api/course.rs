use crate::{
    client::model::error::ApiError,
    model::course::{CourseDto, CreateCourseDto},
};

use super::helper::{
    api_url, delete, get, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_courses() -> Result<Vec<CourseDto>, ApiError> {
    let response = send_request(get(&api_url("Course"))).await?;
    parse_response(response).await
}

pub async fn get_course(id: i32) -> Result<CourseDto, ApiError> {
    let response = send_request(get(&api_url(&format!("Course/{}", id)))).await?;
    parse_response(response).await
}

pub async fn get_courses_by_category(category_id: i32) -> Result<Vec<CourseDto>, ApiError> {
    let url = api_url(&format!("Course/ByCategory/{}", category_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_courses_by_student(student_id: &str) -> Result<Vec<CourseDto>, ApiError> {
    let url = api_url(&format!("Course/ByStudent/{}", student_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_courses_by_teacher(teacher_id: &str) -> Result<Vec<CourseDto>, ApiError> {
    let url = api_url(&format!("Course/ByTeacher/{}", teacher_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Creates a course and returns its id
pub async fn create_course(payload: &CreateCourseDto) -> Result<i32, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post(&api_url("Course")).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_course(id: i32) -> Result<(), ApiError> {
    let response = send_request(delete(&api_url(&format!("Course/{}", id)))).await?;
    parse_empty_response(response).await
}
