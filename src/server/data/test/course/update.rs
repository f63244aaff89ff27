use super::*;

/// Tests updating a course.
///
/// Verifies that the course can move to another category and that optional
/// fields can be cleared.
///
/// Expected: Ok(Some(Course)) with updated fields
#[tokio::test]
async fn updates_course_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let other = factory::category::create_category_with_name(db, "Data").await?;
    let course = factory::course::CourseFactory::new(db, category.id)
        .summary("Old summary")
        .days(3)
        .build()
        .await?;

    let updated = CourseRepository::new(db)
        .update(UpdateCourseParam {
            id: course.id,
            code: course.code.clone(),
            name: "Renamed".to_string(),
            summary: None,
            description: None,
            days: Some(4),
            hours: Some(20.0),
            category_id: other.id,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.code, course.code);
    assert_eq!(updated.summary, None);
    assert_eq!(updated.days, Some(4));
    assert_eq!(updated.category_id, other.id);
    assert_eq!(updated.category_name, "Data");

    Ok(())
}

/// Tests updating a course that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let result = CourseRepository::new(db)
        .update(UpdateCourseParam {
            id: 999,
            code: "X".to_string(),
            name: "X".to_string(),
            summary: None,
            description: None,
            days: None,
            hours: None,
            category_id: category.id,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
