use super::*;

/// Tests deleting a category.
///
/// Verifies that courses of the category and the enrollments in those courses are
/// deleted along with it.
///
/// Expected: Ok(true), courses and enrollments removed
#[tokio::test]
async fn deletes_category_with_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = CategoryRepository::new(db);
    let deleted = repo.delete(course.category_id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(course.category_id).await?.is_none());

    let courses = entity::prelude::Course::find().all(db).await?;
    assert!(courses.is_empty());

    let enrollments = entity::prelude::StudentCourse::find().all(db).await?;
    assert!(enrollments.is_empty());

    let student = entity::prelude::AppUser::find_by_id(student.id).one(db).await?;
    assert!(student.is_some());

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CategoryRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
