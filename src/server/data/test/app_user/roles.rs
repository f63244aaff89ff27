use super::*;

/// Tests assigning a role and reading the role names back.
///
/// Expected: Ok(true) and role names `["Student"]`
#[tokio::test]
async fn assigns_role_and_lists_role_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db, STUDENT_ROLE).await?;
    let (_, user) = factory::helpers::create_user_with_address(db).await?;

    let repo = AppUserRepository::new(db);
    let assigned = repo.assign_role(&user.id, STUDENT_ROLE).await?;

    assert!(assigned);
    assert_eq!(repo.get_role_names(&user.id).await?, vec![STUDENT_ROLE]);

    Ok(())
}

/// Tests assigning the same role twice.
///
/// Verifies that the second assignment does not fail on the composite key.
///
/// Expected: Ok(true) both times, a single membership
#[tokio::test]
async fn assigning_held_role_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db, TEACHER_ROLE).await?;
    let (_, user) = factory::helpers::create_user_with_address(db).await?;

    let repo = AppUserRepository::new(db);
    assert!(repo.assign_role(&user.id, TEACHER_ROLE).await?);
    assert!(repo.assign_role(&user.id, TEACHER_ROLE).await?);

    let memberships = entity::prelude::UserRole::find().all(db).await?;
    assert_eq!(memberships.len(), 1);

    Ok(())
}

/// Tests assigning a role that does not exist.
///
/// Expected: Ok(false) and no role names
#[tokio::test]
async fn ignores_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user) = factory::helpers::create_user_with_address(db).await?;

    let repo = AppUserRepository::new(db);
    let assigned = repo.assign_role(&user.id, "Principal").await?;

    assert!(!assigned);
    assert!(repo.get_role_names(&user.id).await?.is_empty());

    Ok(())
}

/// Tests clearing all roles of a user.
///
/// Verifies that memberships of other users are untouched.
///
/// Expected: Ok(2) removed rows, other user keeps its role
#[tokio::test]
async fn clears_all_roles_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db, STUDENT_ROLE).await?;
    factory::create_role(db, TEACHER_ROLE).await?;
    let (_, user) = factory::helpers::create_user_with_address(db).await?;
    let other = factory::helpers::create_user_in_role(db, STUDENT_ROLE).await?;

    let repo = AppUserRepository::new(db);
    repo.assign_role(&user.id, STUDENT_ROLE).await?;
    repo.assign_role(&user.id, TEACHER_ROLE).await?;

    let removed = repo.clear_roles(&user.id).await?;

    assert_eq!(removed, 2);
    assert!(repo.get_role_names(&user.id).await?.is_empty());
    assert_eq!(repo.get_role_names(&other.id).await?, vec![STUDENT_ROLE]);

    Ok(())
}
