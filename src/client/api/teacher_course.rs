use crate::{client::model::error::ApiError, model::teacher_course::TeacherCourseKeyDto};

use super::helper::{
    api_url, delete, parse_empty_response, parse_response, post, send_request, serialize_json,
};

pub async fn assign_teacher(
    teacher_id: String,
    course_id: i32,
) -> Result<TeacherCourseKeyDto, ApiError> {
    let body = serialize_json(&TeacherCourseKeyDto {
        teacher_id,
        course_id,
    })?;

    let response = send_request(post(&api_url("TeacherCourse")).body(body)).await?;
    parse_response(response).await
}

pub async fn unassign_teacher(teacher_id: &str, course_id: i32) -> Result<(), ApiError> {
    let url = api_url(&format!("TeacherCourse/{}/{}", teacher_id, course_id));

    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
