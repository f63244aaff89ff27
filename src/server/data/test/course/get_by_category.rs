use super::*;

/// Tests listing courses of a category.
///
/// Expected: Ok(Vec) with only the courses in the requested category
#[tokio::test]
async fn lists_courses_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;
    factory::create_course(db, category.id).await?;
    factory::create_course(db, category.id).await?;
    factory::create_course(db, other.id).await?;

    let courses = CourseRepository::new(db)
        .get_by_category(category.id)
        .await?;

    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.category_id == category.id));
    assert!(courses.iter().all(|c| c.category_name == category.name));

    Ok(())
}
