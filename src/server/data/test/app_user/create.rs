use super::*;

/// Tests creating a user and fetching it back.
///
/// Verifies that the user receives a generated ID, that the user name mirrors the
/// email and that the formatted address name is resolved.
///
/// Expected: Ok(AppUser) equal to the fetched user
#[tokio::test]
async fn creates_user_with_address_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::address::AddressFactory::new(db)
        .street("Storgatan")
        .street_number("1")
        .postal_code("41101")
        .city("Göteborg")
        .build()
        .await?;

    let repo = AppUserRepository::new(db);
    let created = repo
        .create(create_param(address.id, "ada@westcoast.se"))
        .await?;

    assert!(!created.id.is_empty());
    assert_eq!(created.email, "ada@westcoast.se");
    assert_eq!(created.address_name, "Storgatan 1, 41101 Göteborg");

    let fetched = repo.get_by_id(&created.id).await?;
    assert_eq!(fetched, Some(created.clone()));

    let stored = entity::prelude::AppUser::find_by_id(created.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_name, "ada@westcoast.se");

    Ok(())
}

/// Tests creating two users with the same email.
///
/// Verifies that the unique user name rejects the second insert.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;

    let repo = AppUserRepository::new(db);
    repo.create(create_param(address.id, "dup@westcoast.se"))
        .await?;
    let result = repo
        .create(create_param(address.id, "dup@westcoast.se"))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests creating a user referencing an address that does not exist.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AppUserRepository::new(db)
        .create(create_param(999, "nobody@westcoast.se"))
        .await;

    assert!(result.is_err());

    Ok(())
}
