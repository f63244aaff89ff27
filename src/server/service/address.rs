use sea_orm::DatabaseConnection;

use crate::server::{
    data::address::AddressRepository,
    error::AppError,
    model::address::{Address, CreateAddressParam, UpdateAddressParam},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Address>, AppError> {
        Ok(AddressRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Address>, AppError> {
        Ok(AddressRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateAddressParam) -> Result<Address, AppError> {
        Ok(AddressRepository::new(self.db).create(param).await?)
    }

    /// Updates an address, returning `None` if it does not exist
    pub async fn update(&self, param: UpdateAddressParam) -> Result<Option<Address>, AppError> {
        Ok(AddressRepository::new(self.db).update(param).await?)
    }

    /// Deletes an address, returning `false` if it does not exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(AddressRepository::new(self.db).delete(id).await?)
    }
}
