use super::*;

/// Tests deleting a user.
///
/// Verifies that the user's role memberships and enrollments are removed along
/// with the user while the course itself remains.
///
/// Expected: Ok(true), dependents removed
#[tokio::test]
async fn deletes_user_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::helpers::create_user_in_role(db, STUDENT_ROLE).await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    factory::create_student_course(db, &student.id, course.id).await?;

    let repo = AppUserRepository::new(db);
    let deleted = repo.delete(&student.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(&student.id).await?.is_none());
    assert!(repo.get_role_names(&student.id).await?.is_empty());

    let enrollments = entity::prelude::StudentCourse::find().all(db).await?;
    assert!(enrollments.is_empty());

    let course = entity::prelude::Course::find_by_id(course.id).one(db).await?;
    assert!(course.is_some());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AppUserRepository::new(db).delete("missing").await?;

    assert!(!deleted);

    Ok(())
}
