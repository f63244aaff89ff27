use super::*;

/// Tests enrolling a student in a course.
///
/// Verifies that the returned key matches the pair and that the stored enrollment
/// carries the student's full name and the course name.
///
/// Expected: Ok(StudentCourseKey)
#[tokio::test]
async fn enrolls_student_in_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;
    let student = factory::app_user::AppUserFactory::new(db, address.id)
        .first_name("Ada")
        .last_name("Lovelace")
        .build()
        .await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let repo = StudentCourseRepository::new(db);
    let key = repo
        .create(CreateStudentCourseParam {
            student_id: student.id.clone(),
            course_id: course.id,
            is_started: true,
            is_completed: false,
            grade: None,
        })
        .await?;

    assert_eq!(key.student_id, student.id);
    assert_eq!(key.course_id, course.id);

    let enrollment = repo.get_by_key(&student.id, course.id).await?.unwrap();
    assert_eq!(enrollment.student_name, "Ada Lovelace");
    assert_eq!(enrollment.course_name, course.name);
    assert!(enrollment.is_started);
    assert!(!enrollment.is_completed);

    Ok(())
}

/// Tests enrolling the same student in the same course twice.
///
/// Verifies that the composite key rejects the duplicate pair.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let result = StudentCourseRepository::new(db)
        .create(CreateStudentCourseParam {
            student_id: student.id,
            course_id: course.id,
            is_started: false,
            is_completed: false,
            grade: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests enrolling a student that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let result = StudentCourseRepository::new(db)
        .create(CreateStudentCourseParam {
            student_id: "missing".to_string(),
            course_id: course.id,
            is_started: false,
            is_completed: false,
            grade: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
