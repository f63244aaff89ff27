use super::*;

/// Tests updating a user.
///
/// Verifies that the supplied fields change, the user name follows the new email
/// and the address name is resolved for the new address.
///
/// Expected: Ok(Some(AppUser)) with updated fields
#[tokio::test]
async fn updates_user_fields_and_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, user) = factory::helpers::create_user_with_address(db).await?;
    let new_address = factory::address::AddressFactory::new(db)
        .street("Kungsgatan")
        .street_number("3")
        .postal_code("11143")
        .city("Stockholm")
        .build()
        .await?;

    let repo = AppUserRepository::new(db);
    let updated = repo
        .update(UpdateAppUserParam {
            id: user.id.clone(),
            email: "grace@westcoast.se".to_string(),
            phone_number: None,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            address_id: new_address.id,
            role_name: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.email, "grace@westcoast.se");
    assert_eq!(updated.full_name(), "Grace Hopper");
    assert_eq!(updated.phone_number, None);
    assert_eq!(updated.address_name, "Kungsgatan 3, 11143 Stockholm");

    let stored = entity::prelude::AppUser::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_name, "grace@westcoast.se");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;

    let result = AppUserRepository::new(db)
        .update(UpdateAppUserParam {
            id: "missing".to_string(),
            email: "missing@westcoast.se".to_string(),
            phone_number: None,
            first_name: "No".to_string(),
            last_name: "Body".to_string(),
            address_id: address.id,
            role_name: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
