use super::*;

/// Tests updating an existing address.
///
/// Verifies that all fields are replaced with the supplied values.
///
/// Expected: Ok(Some(Address)) with updated fields
#[tokio::test]
async fn updates_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let address = factory::create_address(db).await?;

    let repo = AddressRepository::new(db);
    let updated = repo
        .update(UpdateAddressParam {
            id: address.id,
            street: "Kungsgatan".to_string(),
            street_number: "3B".to_string(),
            postal_code: "11143".to_string(),
            city: "Stockholm".to_string(),
            country: "Sweden".to_string(),
        })
        .await?
        .unwrap();

    assert_eq!(updated.id, address.id);
    assert_eq!(updated.display_name(), "Kungsgatan 3B, 11143 Stockholm");

    let stored = repo.get_by_id(address.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating an address that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Address)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let param = create_param();
    let result = AddressRepository::new(db)
        .update(UpdateAddressParam {
            id: 999,
            street: param.street,
            street_number: param.street_number,
            postal_code: param.postal_code,
            city: param.city,
            country: param.country,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
