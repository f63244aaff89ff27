use super::*;

/// Tests listing assignments by course and by teacher.
///
/// Expected: each filter returns only the matching assignments
#[tokio::test]
async fn lists_assignments_by_course_and_teacher() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let (_, other_teacher) = factory::helpers::create_user_with_address(db).await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let other_course = factory::create_course(db, course.category_id).await?;
    factory::create_teacher_course(db, &teacher.id, course.id).await?;
    factory::create_teacher_course(db, &other_teacher.id, course.id).await?;
    factory::create_teacher_course(db, &teacher.id, other_course.id).await?;

    let repo = TeacherCourseRepository::new(db);

    let by_course = repo.get_by_course(course.id).await?;
    assert_eq!(by_course.len(), 2);

    let by_teacher = repo.get_by_teacher(&teacher.id).await?;
    assert_eq!(by_teacher.len(), 2);
    assert!(by_teacher.iter().all(|a| a.teacher_id == teacher.id));

    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
