use super::*;

/// Tests deleting a course.
///
/// Verifies that enrollments and teaching assignments for the course are removed
/// while the category remains.
///
/// Expected: Ok(true), join rows removed
#[tokio::test]
async fn deletes_course_and_join_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;
    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    factory::create_teacher_course(db, &teacher.id, course.id).await?;

    let repo = CourseRepository::new(db);
    let deleted = repo.delete(course.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(course.id).await?.is_none());
    assert!(entity::prelude::StudentCourse::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::TeacherCourse::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Category::find_by_id(course.category_id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
