use dioxus_logger::tracing;

use crate::{
    client::model::{error::ApiError, user_filter::UserFilter},
    model::{
        address::CreateAddressDto,
        app_user::{AppUserDto, CreateAppUserDto},
    },
};

use super::{
    address::create_address,
    helper::{
        api_url, delete, get, parse_empty_response, parse_response, post, send_request,
        serialize_json,
    },
};

pub async fn get_users(filter: UserFilter) -> Result<Vec<AppUserDto>, ApiError> {
    let response = send_request(get(&api_url(filter.api_path()))).await?;
    parse_response(response).await
}

pub async fn get_user(id: &str) -> Result<AppUserDto, ApiError> {
    let response = send_request(get(&api_url(&format!("AppUser/{}", id)))).await?;
    parse_response(response).await
}

pub async fn get_students_by_course(course_id: i32) -> Result<Vec<AppUserDto>, ApiError> {
    let url = api_url(&format!("AppUser/StudentsByCourse/{}", course_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_teachers_by_course(course_id: i32) -> Result<Vec<AppUserDto>, ApiError> {
    let url = api_url(&format!("AppUser/TeachersByCourse/{}", course_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_role_names(user_id: &str) -> Result<Vec<String>, ApiError> {
    let url = api_url(&format!("AppUser/RoleNamesByAppUser/{}", user_id));

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Creates a user and returns the new id
pub async fn create_user(payload: &CreateAppUserDto) -> Result<String, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post(&api_url("AppUser")).body(body)).await?;
    parse_response(response).await
}

/// Creates the address first and then the user living there.
///
/// A failed step is reported as "Failed to create address" or "Failed to create user".
/// When the user cannot be created the address stays in place.
pub async fn create_user_with_address(
    address: CreateAddressDto,
    mut user: CreateAppUserDto,
) -> Result<String, ApiError> {
    user.address_id = create_address(&address)
        .await
        .map_err(|err| step_failed(err, "Failed to create address"))?;

    create_user(&user)
        .await
        .map_err(|err| step_failed(err, "Failed to create user"))
}

/// Logs the API error and replaces its message with the failed step.
fn step_failed(err: ApiError, message: &str) -> ApiError {
    tracing::error!("{}: {}", message, err);
    ApiError::new(err.status, message)
}

pub async fn delete_user(id: &str) -> Result<(), ApiError> {
    let response = send_request(delete(&api_url(&format!("AppUser/{}", id)))).await?;
    parse_empty_response(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_step_keeps_status_and_hides_api_message() {
        let err = step_failed(
            ApiError::new(500, "Fail: Create address"),
            "Failed to create address",
        );

        assert_eq!(err.status, 500);
        assert_eq!(err.message, "Failed to create address");
    }
}
