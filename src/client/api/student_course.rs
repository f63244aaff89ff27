use crate::{
    client::model::error::ApiError,
    model::student_course::{CreateStudentCourseDto, StudentCourseDto, StudentCourseKeyDto},
};

use super::helper::{
    api_url, delete, get, parse_empty_response, parse_response, post, send_request,
    serialize_json,
};

pub async fn get_enrollments_by_student(
    student_id: &str,
) -> Result<Vec<StudentCourseDto>, ApiError> {
    let url = api_url(&format!("StudentCourse/ByStudent/{}", student_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Enrolls a student in a course that has not been started yet
pub async fn enroll_student(
    student_id: String,
    course_id: i32,
) -> Result<StudentCourseKeyDto, ApiError> {
    let payload = CreateStudentCourseDto {
        student_id,
        course_id,
        ..Default::default()
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post(&api_url("StudentCourse")).body(body)).await?;
    parse_response(response).await
}

pub async fn unenroll_student(student_id: &str, course_id: i32) -> Result<(), ApiError> {
    let url = api_url(&format!("StudentCourse/{}/{}", student_id, course_id));

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
