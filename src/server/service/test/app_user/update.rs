use super::*;

fn update_param(id: &str, address_id: i32, role_name: Option<&str>) -> UpdateAppUserParam {
    UpdateAppUserParam {
        id: id.to_string(),
        email: "margaret@westcoast.se".to_string(),
        phone_number: Some("031-123456".to_string()),
        first_name: "Margaret".to_string(),
        last_name: "Hamilton".to_string(),
        address_id,
        role_name: role_name.map(str::to_string),
    }
}

/// Tests updating a user with a new role.
///
/// Verifies that the new role replaces the old one instead of being added to it.
///
/// Expected: Ok(Some(AppUser)) with role names `["Teacher"]`
#[tokio::test]
async fn replaces_role_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let user = factory::helpers::create_user_in_role(db, STUDENT_ROLE).await?;

    let service = AppUserService::new(db);
    let updated = service
        .update(update_param(&user.id, user.address_id, Some(TEACHER_ROLE)))
        .await?
        .unwrap();

    assert_eq!(updated.email, "margaret@westcoast.se");
    assert_eq!(
        service.get_role_names(&user.id).await?,
        Some(vec![TEACHER_ROLE.to_string()])
    );

    Ok(())
}

/// Tests updating a user without a role name.
///
/// Verifies that existing roles are kept.
///
/// Expected: Ok(Some(AppUser)) with role names `["Student"]`
#[tokio::test]
async fn keeps_roles_without_role_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let user = factory::helpers::create_user_in_role(db, STUDENT_ROLE).await?;

    let service = AppUserService::new(db);
    service
        .update(update_param(&user.id, user.address_id, None))
        .await?;

    assert_eq!(
        service.get_role_names(&user.id).await?,
        Some(vec![STUDENT_ROLE.to_string()])
    );

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Verifies that no role is touched when the user is missing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let address = factory::create_address(db).await?;

    let result = AppUserService::new(db)
        .update(update_param("missing", address.id, Some(TEACHER_ROLE)))
        .await?;

    assert!(result.is_none());

    Ok(())
}
