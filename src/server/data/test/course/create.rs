use super::*;

/// Tests creating a course and fetching it back.
///
/// Verifies that all fields are stored, including the optional ones, and that the
/// course carries the name of its category.
///
/// Expected: Ok(Some(Course)) equal to the created one
#[tokio::test]
async fn creates_course_with_category_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category_with_name(db, "Programming").await?;

    let repo = CourseRepository::new(db);
    let created = repo
        .create(CreateCourseParam {
            code: "RUST101".to_string(),
            name: "Rust fundamentals".to_string(),
            summary: Some("Ownership and borrowing".to_string()),
            description: Some("# Week 1\n\nThe borrow checker".to_string()),
            days: Some(5),
            hours: Some(37.5),
            category_id: category.id,
        })
        .await?;

    assert_eq!(created.category_name, "Programming");
    assert_eq!(created.days, Some(5));
    assert_eq!(created.hours, Some(37.5));

    assert_eq!(repo.get_by_id(created.id).await?, Some(created));

    Ok(())
}

/// Tests creating a course in a category that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CourseRepository::new(db)
        .create(CreateCourseParam {
            code: "X1".to_string(),
            name: "Orphan".to_string(),
            summary: None,
            description: None,
            days: None,
            hours: None,
            category_id: 999,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
