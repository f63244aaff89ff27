use super::*;

use crate::{
    model::app_user::{CreateAppUserDto, UpdateAppUserDto, STUDENT_ROLE},
    server::startup::seed_roles,
};

/// Tests fetching a user that does not exist.
///
/// Expected: 404 with the plain-text `Fail: Find appUser with id ...` message
#[tokio::test]
async fn get_missing_user_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = call(db, Method::GET, "/api/AppUser/missing").await;

    response.assert_error(StatusCode::NOT_FOUND, "Fail: Find appUser with id missing");

    Ok(())
}

/// Tests creating a user through the API.
///
/// Verifies that the response carries the new id and that the requested role was
/// assigned to that user.
///
/// Expected: 201 with the id, then 200 with role names `["Student"]`
#[tokio::test]
async fn create_user_returns_created_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let address = factory::create_address(db).await?;

    let payload = CreateAppUserDto {
        email: "grace@westcoast.se".to_string(),
        phone_number: None,
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        address_id: address.id,
        role_name: Some(STUDENT_ROLE.to_string()),
    };
    let response = call_json(db, Method::POST, "/api/AppUser", &payload).await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id: String = response.json();

    let roles = call(
        db,
        Method::GET,
        &format!("/api/AppUser/RoleNamesByAppUser/{}", id),
    )
    .await;

    assert_eq!(roles.status, StatusCode::OK);
    assert_eq!(roles.json::<Vec<String>>(), vec![STUDENT_ROLE.to_string()]);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: 404 with `Fail: Find appUser to update`
#[tokio::test]
async fn update_missing_user_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;

    let payload = UpdateAppUserDto {
        id: "missing".to_string(),
        email: "nobody@westcoast.se".to_string(),
        phone_number: None,
        first_name: "No".to_string(),
        last_name: "Body".to_string(),
        address_id: address.id,
        role_name: None,
    };
    let response = call_json(db, Method::PUT, "/api/AppUser", &payload).await;

    response.assert_error(StatusCode::NOT_FOUND, "Fail: Find appUser to update");

    Ok(())
}

/// Tests deleting users through the API.
///
/// Verifies that an existing user is removed with an empty 204 response and that
/// deleting it again reports the missing user.
///
/// Expected: 204, then 404 with `Fail: Find appUser to delete`
#[tokio::test]
async fn delete_user_then_delete_again() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user) = factory::helpers::create_user_with_address(db).await?;
    let uri = format!("/api/AppUser/{}", user.id);

    let deleted = call(db, Method::DELETE, &uri).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.body.is_empty());

    let again = call(db, Method::DELETE, &uri).await;
    again.assert_error(StatusCode::NOT_FOUND, "Fail: Find appUser to delete");

    Ok(())
}
