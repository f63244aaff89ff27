use super::*;

/// Tests getting a category by ID.
///
/// Expected: Ok(Some(Category))
#[tokio::test]
async fn gets_category_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db).await?;

    let category = CategoryRepository::new(db)
        .get_by_id(created.id)
        .await?
        .unwrap();

    assert_eq!(category.id, created.id);
    assert_eq!(category.name, created.name);

    Ok(())
}

/// Tests getting a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db).get_by_id(999).await?;

    assert!(category.is_none());

    Ok(())
}
