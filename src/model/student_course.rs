use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudentCourseDto {
    pub student_id: String,
    pub student_name: String,
    pub course_id: i32,
    pub course_name: String,
    pub is_started: bool,
    pub is_completed: bool,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StudentCourseKeyDto {
    pub student_id: String,
    pub course_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentCourseDto {
    pub student_id: String,
    pub course_id: i32,
    #[serde(default)]
    pub is_started: bool,
    #[serde(default)]
    pub is_completed: bool,
    pub grade: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentCourseDto {
    pub student_id: String,
    pub course_id: i32,
    pub is_started: bool,
    pub is_completed: bool,
    pub grade: Option<String>,
}
