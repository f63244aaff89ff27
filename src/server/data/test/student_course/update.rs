use super::*;

/// Tests recording progress on an enrollment.
///
/// Expected: Ok(Some(key)) and stored progress fields updated
#[tokio::test]
async fn updates_progress_and_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, _) = factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = StudentCourseRepository::new(db);
    let key = repo
        .update(UpdateStudentCourseParam {
            student_id: student.id.clone(),
            course_id: course.id,
            is_started: true,
            is_completed: true,
            grade: Some("VG".to_string()),
        })
        .await?;

    assert!(key.is_some());

    let enrollment = repo.get_by_key(&student.id, course.id).await?.unwrap();
    assert!(enrollment.is_started);
    assert!(enrollment.is_completed);
    assert_eq!(enrollment.grade.as_deref(), Some("VG"));

    Ok(())
}

/// Tests updating an enrollment that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_user_with_address(db).await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let key = StudentCourseRepository::new(db)
        .update(UpdateStudentCourseParam {
            student_id: student.id,
            course_id: course.id,
            is_started: true,
            is_completed: false,
            grade: None,
        })
        .await?;

    assert!(key.is_none());

    Ok(())
}
