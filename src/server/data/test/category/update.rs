use super::*;

/// Tests renaming a category.
///
/// Expected: Ok(Some(Category)) with the new name
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParam {
            id: created.id,
            name: "Cloud".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Cloud");
    assert_eq!(repo.get_by_id(created.id).await?.unwrap().name, "Cloud");

    Ok(())
}

/// Tests renaming a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CategoryRepository::new(db)
        .update(UpdateCategoryParam {
            id: 999,
            name: "Cloud".to_string(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
