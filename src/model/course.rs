use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub summary: Option<String>,
    /// Markdown-formatted course description.
    pub description: Option<String>,
    pub days: Option<i32>,
    pub hours: Option<f64>,
    pub category_name: String,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub code: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub days: Option<i32>,
    pub hours: Option<f64>,
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub days: Option<i32>,
    pub hours: Option<f64>,
    pub category_id: i32,
}
