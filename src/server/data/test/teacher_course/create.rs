use super::*;

/// Tests assigning a teacher to a course.
///
/// Expected: Ok(TeacherCourseKey) and the assignment listed with names
#[tokio::test]
async fn assigns_teacher_to_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;

    let repo = TeacherCourseRepository::new(db);
    let key = repo
        .create(TeacherCourseKey {
            teacher_id: teacher.id.clone(),
            course_id: course.id,
        })
        .await?;

    assert_eq!(key.teacher_id, teacher.id);

    let assignment = repo.get_by_key(&teacher.id, course.id).await?.unwrap();
    assert_eq!(
        assignment.teacher_name,
        format!("{} {}", teacher.first_name, teacher.last_name)
    );
    assert_eq!(assignment.course_name, course.name);

    Ok(())
}

/// Tests assigning the same teacher to the same course twice.
///
/// Expected: Err(DbErr) from the composite key
#[tokio::test]
async fn rejects_duplicate_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, teacher) = factory::helpers::create_user_with_address(db).await?;
    let (_, course) = factory::helpers::create_course_with_category(db).await?;
    factory::create_teacher_course(db, &teacher.id, course.id).await?;

    let result = TeacherCourseRepository::new(db)
        .create(TeacherCourseKey {
            teacher_id: teacher.id,
            course_id: course.id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
