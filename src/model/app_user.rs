use serde::{Deserialize, Serialize};

/// Role name granted to students.
pub const STUDENT_ROLE: &str = "Student";
/// Role name granted to teachers.
pub const TEACHER_ROLE: &str = "Teacher";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AppUserDto {
    pub id: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// Formatted one-line address of the user.
    pub address_name: String,
    pub address_id: i32,
}

impl AppUserDto {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateAppUserDto {
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address_id: i32,
    /// Role assigned after the user has been created, if any.
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppUserDto {
    pub id: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address_id: i32,
    /// Replaces all current roles when present.
    pub role_name: Option<String>,
}
