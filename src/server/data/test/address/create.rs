use super::*;

/// Tests creating an address and fetching it back.
///
/// Verifies that every field supplied on create is stored and returned by
/// `get_by_id`.
///
/// Expected: Ok(Some(Address)) with identical fields
#[tokio::test]
async fn creates_and_fetches_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AddressRepository::new(db);
    let created = repo.create(create_param()).await?;

    let fetched = repo.get_by_id(created.id).await?;

    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(created.street, "Storgatan");
    assert_eq!(created.display_name(), "Storgatan 12, 41101 Göteborg");

    Ok(())
}

/// Tests listing addresses.
///
/// Expected: Ok(Vec) containing every created address
#[tokio::test]
async fn lists_all_addresses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_address(db).await?;
    factory::create_address(db).await?;

    let addresses = AddressRepository::new(db).get_all().await?;

    assert_eq!(addresses.len(), 2);

    Ok(())
}
