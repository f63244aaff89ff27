use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeacherCourseDto {
    pub teacher_id: String,
    pub teacher_name: String,
    pub course_id: i32,
    pub course_name: String,
}

/// Composite key of a teaching assignment, also used as the create payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeacherCourseKeyDto {
    pub teacher_id: String,
    pub course_id: i32,
}
