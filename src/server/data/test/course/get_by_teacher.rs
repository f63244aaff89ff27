use super::*;

/// Tests listing the courses a teacher is assigned to.
///
/// Expected: Ok(Vec) with the assigned course only
#[tokio::test]
async fn lists_courses_by_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let (_, assigned) = factory::helpers::create_course_with_category(db).await?;
    factory::helpers::create_course_with_category(db).await?;
    factory::create_teacher_course(db, &teacher.id, assigned.id).await?;

    let courses = CourseRepository::new(db).get_by_teacher(&teacher.id).await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, assigned.id);

    Ok(())
}
