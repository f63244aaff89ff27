use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::address::{Address, CreateAddressParam, UpdateAddressParam};

pub struct AddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all addresses ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Address>, DbErr> {
        let addresses = entity::prelude::Address::find()
            .order_by_asc(entity::address::Column::Id)
            .all(self.db)
            .await?;

        Ok(addresses.into_iter().map(Address::from_entity).collect())
    }

    /// Gets an address by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Address>, DbErr> {
        let address = entity::prelude::Address::find_by_id(id).one(self.db).await?;

        Ok(address.map(Address::from_entity))
    }

    /// Creates a new address
    pub async fn create(&self, param: CreateAddressParam) -> Result<Address, DbErr> {
        let address = entity::address::ActiveModel {
            street: ActiveValue::Set(param.street),
            street_number: ActiveValue::Set(param.street_number),
            postal_code: ActiveValue::Set(param.postal_code),
            city: ActiveValue::Set(param.city),
            country: ActiveValue::Set(param.country),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Address::from_entity(address))
    }

    /// Updates every field of an address
    ///
    /// # Returns
    /// - `Ok(Some(Address))` - The updated address
    /// - `Ok(None)` - No address with `param.id` exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateAddressParam) -> Result<Option<Address>, DbErr> {
        let Some(address) = entity::prelude::Address::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::address::ActiveModel = address.into();
        active_model.street = ActiveValue::Set(param.street);
        active_model.street_number = ActiveValue::Set(param.street_number);
        active_model.postal_code = ActiveValue::Set(param.postal_code);
        active_model.city = ActiveValue::Set(param.city);
        active_model.country = ActiveValue::Set(param.country);

        let address = active_model.update(self.db).await?;

        Ok(Some(Address::from_entity(address)))
    }

    /// Deletes an address along with the users living there
    ///
    /// # Returns
    /// - `Ok(true)` - The address was deleted
    /// - `Ok(false)` - No address with the ID exists
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Address::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
