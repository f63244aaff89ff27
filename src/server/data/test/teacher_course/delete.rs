use super::*;

/// Tests removing a teacher from a course.
///
/// Expected: Ok(true) first, Ok(false) once the assignment is gone
#[tokio::test]
async fn deletes_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    factory::create_teacher_course(db, &teacher.id, course.id).await?;

    let repo = TeacherCourseRepository::new(db);

    assert!(repo.delete(&teacher.id, course.id).await?);
    assert!(repo.get_by_key(&teacher.id, course.id).await?.is_none());
    assert!(!repo.delete(&teacher.id, course.id).await?);

    Ok(())
}
