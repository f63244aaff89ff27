use super::*;

/// Tests listing students and teachers.
///
/// Verifies that each list contains exactly the users holding the matching role
/// and that users without a role appear in neither.
///
/// Expected: one student, one teacher
#[tokio::test]
async fn lists_users_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::helpers::create_user_in_role(db, STUDENT_ROLE).await?;
    let teacher = factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;
    factory::helpers::create_user_with_address(db).await?;

    let repo = AppUserRepository::new(db);

    let students = repo.get_students().await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);

    let teachers = repo.get_teachers().await?;
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].id, teacher.id);

    let everyone = repo.get_all().await?;
    assert_eq!(everyone.len(), 3);

    Ok(())
}

/// Tests listing users of a role that was never created.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_user_with_address(db).await?;

    let users = AppUserRepository::new(db)
        .get_by_role_name("Janitor")
        .await?;

    assert!(users.is_empty());

    Ok(())
}
