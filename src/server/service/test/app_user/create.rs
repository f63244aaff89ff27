use super::*;

fn create_param(address_id: i32, role_name: Option<&str>) -> CreateAppUserParam {
    CreateAppUserParam {
        email: "linus@westcoast.se".to_string(),
        phone_number: None,
        first_name: "Linus".to_string(),
        last_name: "Torvalds".to_string(),
        address_id,
        role_name: role_name.map(str::to_string),
    }
}

/// Tests creating a user with a role.
///
/// Verifies that the role is assigned after the user has been created and that
/// the user is listed among the students.
///
/// Expected: Ok(AppUser) with role names `["Student"]`
#[tokio::test]
async fn creates_user_and_assigns_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let address = factory::create_address(db).await?;

    let service = AppUserService::new(db);
    let user = service
        .create(create_param(address.id, Some(STUDENT_ROLE)))
        .await?;

    assert_eq!(
        service.get_role_names(&user.id).await?,
        Some(vec![STUDENT_ROLE.to_string()])
    );

    let students = service.get_students().await?;
    assert_eq!(students.len(), 1);
    assert!(service.get_teachers().await?.is_empty());

    Ok(())
}

/// Tests creating a user without a role.
///
/// Expected: Ok(AppUser) without any role
#[tokio::test]
async fn creates_user_without_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let address = factory::create_address(db).await?;

    let service = AppUserService::new(db);
    let user = service.create(create_param(address.id, None)).await?;

    assert_eq!(service.get_role_names(&user.id).await?, Some(Vec::new()));

    Ok(())
}

/// Tests creating a user with a role name that does not exist.
///
/// Verifies that the unknown role is skipped rather than failing the create.
///
/// Expected: Ok(AppUser) without any role
#[tokio::test]
async fn skips_unknown_role_on_create() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let address = factory::create_address(db).await?;

    let service = AppUserService::new(db);
    let user = service
        .create(create_param(address.id, Some("Principal")))
        .await?;

    assert!(service.get_by_id(&user.id).await?.is_some());
    assert_eq!(service.get_role_names(&user.id).await?, Some(Vec::new()));

    Ok(())
}

/// Tests creating a user when the role cannot be stored.
///
/// Verifies that a database failure while assigning the role does not fail the create,
/// because the user row has already been inserted.
///
/// Expected: Ok(AppUser) and the user row exists
#[tokio::test]
async fn keeps_user_when_role_assignment_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Address)
        .with_table(AppUser)
        .with_table(Role)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    let address = factory::create_address(db).await?;

    let service = AppUserService::new(db);
    let user = service
        .create(create_param(address.id, Some(TEACHER_ROLE)))
        .await?;

    let stored = service.get_by_id(&user.id).await?.unwrap();
    assert_eq!(stored.email, "linus@westcoast.se");

    Ok(())
}

/// Tests reading role names of a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn role_names_of_missing_user_is_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role_names = AppUserService::new(db).get_role_names("missing").await?;

    assert!(role_names.is_none());

    Ok(())
}

/// Tests that seeding roles twice keeps a single row per role.
///
/// Expected: both role names resolve and seeding is repeatable
#[tokio::test]
async fn seeds_roles_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_roles(db).await?;
    seed_roles(db).await?;

    let (_, user) = factory::helpers::create_user_with_address(db).await?;
    let teacher = factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;

    let service = AppUserService::new(db);
    assert_eq!(
        service.get_role_names(&teacher.id).await?,
        Some(vec![TEACHER_ROLE.to_string()])
    );
    assert_eq!(service.get_role_names(&user.id).await?, Some(Vec::new()));

    Ok(())
}
