use super::*;

/// Tests listing the courses a student is enrolled in.
///
/// Expected: Ok(Vec) with the enrolled courses only
#[tokio::test]
async fn lists_courses_by_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, first, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;
    let second = factory::create_course(db, first.category_id).await?;
    factory::create_course(db, first.category_id).await?;
    factory::create_student_course(db, &student.id, second.id).await?;

    let mut ids: Vec<i32> = CourseRepository::new(db)
        .get_by_student(&student.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing courses for a student without enrollments.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_student_without_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_user_with_address(db).await?;
    factory::helpers::create_course_with_category(db).await?;

    let courses = CourseRepository::new(db).get_by_student(&student.id).await?;

    assert!(courses.is_empty());

    Ok(())
}
