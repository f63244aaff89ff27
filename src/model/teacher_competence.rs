use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeacherCompetenceDto {
    pub teacher_id: String,
    pub teacher_name: String,
    pub competence_id: i32,
    pub competence_name: String,
}

/// Composite key of a teacher competence, also used as the create payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeacherCompetenceKeyDto {
    pub teacher_id: String,
    pub competence_id: i32,
}
