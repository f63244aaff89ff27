use super::*;

/// Tests removing a student from a course.
///
/// Expected: Ok(true) first, Ok(false) once the enrollment is gone
#[tokio::test]
async fn deletes_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = StudentCourseRepository::new(db);

    assert!(repo.delete(&student.id, course.id).await?);
    assert!(repo.get_by_key(&student.id, course.id).await?.is_none());
    assert!(!repo.delete(&student.id, course.id).await?);

    Ok(())
}
