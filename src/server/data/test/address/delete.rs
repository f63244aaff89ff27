use super::*;

/// Tests deleting an address.
///
/// Verifies that the address is gone and that users living at the address
/// are removed along with it.
///
/// Expected: Ok(true), address and its users deleted
#[tokio::test]
async fn deletes_address_and_its_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (address, user) = factory::helpers::create_user_with_address(db).await?;

    let repo = AddressRepository::new(db);
    let deleted = repo.delete(address.id).await?;

    assert!(deleted);
    assert!(repo.get_by_id(address.id).await?.is_none());

    let user = entity::prelude::AppUser::find_by_id(user.id).one(db).await?;
    assert!(user.is_none());

    Ok(())
}

/// Tests deleting an address that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AddressRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
