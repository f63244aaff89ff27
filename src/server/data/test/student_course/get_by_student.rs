use super::*;

/// Tests listing enrollments by student and by course.
///
/// Expected: each filter returns only the matching enrollments
#[tokio::test]
async fn lists_enrollments_by_student_and_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;
    let (_, other_student) = factory::helpers::create_user_with_address(db).await?;
    factory::create_student_course(db, &other_student.id, course.id).await?;
    let other_course = factory::create_course(db, course.category_id).await?;
    factory::create_student_course(db, &student.id, other_course.id).await?;

    let repo = StudentCourseRepository::new(db);

    let by_student = repo.get_by_student(&student.id).await?;
    assert_eq!(by_student.len(), 2);
    assert!(by_student.iter().all(|e| e.student_id == student.id));

    let by_course = repo.get_by_course(course.id).await?;
    assert_eq!(by_course.len(), 2);
    assert!(by_course.iter().all(|e| e.course_id == course.id));

    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}

/// Tests getting an enrollment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_user_with_address(db).await?;

    let enrollment = StudentCourseRepository::new(db)
        .get_by_key(&student.id, 999)
        .await?;

    assert!(enrollment.is_none());

    Ok(())
}
