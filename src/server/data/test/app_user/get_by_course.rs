use super::*;

/// Tests listing students enrolled in a course.
///
/// Verifies that only students of the requested course are returned.
///
/// Expected: Ok(Vec) with the enrolled student only
#[tokio::test]
async fn lists_students_by_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;
    factory::helpers::create_enrollment_with_dependencies(db).await?;

    let students = AppUserRepository::new(db)
        .get_students_by_course(course.id)
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, student.id);

    Ok(())
}

/// Tests listing teachers assigned to a course.
///
/// Expected: Ok(Vec) with both assigned teachers
#[tokio::test]
async fn lists_teachers_by_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    let first = factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;
    let second = factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;
    let unassigned = factory::helpers::create_user_in_role(db, TEACHER_ROLE).await?;
    factory::create_teacher_course(db, &first.id, course.id).await?;
    factory::create_teacher_course(db, &second.id, course.id).await?;

    let teachers = AppUserRepository::new(db)
        .get_teachers_by_course(course.id)
        .await?;

    assert_eq!(teachers.len(), 2);
    assert!(teachers.iter().all(|t| t.id != unassigned.id));

    Ok(())
}

/// Tests listing students of a course without enrollments.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_course_without_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let students = AppUserRepository::new(db)
        .get_students_by_course(course.id)
        .await?;

    assert!(students.is_empty());

    Ok(())
}
