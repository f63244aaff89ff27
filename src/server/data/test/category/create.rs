use super::*;

/// Tests creating a category.
///
/// Verifies that the category is stored with the provided name and receives an ID.
///
/// Expected: Ok(Category)
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = CategoryRepository::new(db)
        .create(CreateCategoryParam {
            name: "Programming".to_string(),
        })
        .await?;

    assert!(category.id > 0);
    assert_eq!(category.name, "Programming");

    Ok(())
}

/// Tests listing categories.
///
/// Expected: categories ordered by name
#[tokio::test]
async fn lists_categories_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category::create_category_with_name(db, "Web").await?;
    factory::category::create_category_with_name(db, "Databases").await?;

    let categories = CategoryRepository::new(db).get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Databases", "Web"]);

    Ok(())
}
