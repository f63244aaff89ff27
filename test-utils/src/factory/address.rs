//! Address factory for creating test address entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test addresses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::address::AddressFactory;
///
/// let address = AddressFactory::new(&db)
///     .street("Storgatan")
///     .city("Göteborg")
///     .build()
///     .await?;
/// ```
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    street: String,
    street_number: String,
    postal_code: String,
    city: String,
    country: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - street: `"Street {id}"` where id is auto-incremented
    /// - street_number: `"{id}"`
    /// - postal_code: `"41101"`
    /// - city: `"Göteborg"`
    /// - country: `"Sweden"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AddressFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            street: format!("Street {}", id),
            street_number: id.to_string(),
            postal_code: "41101".to_string(),
            city: "Göteborg".to_string(),
            country: "Sweden".to_string(),
        }
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn street_number(mut self, street_number: impl Into<String>) -> Self {
        self.street_number = street_number.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::address::Model)` - Created address entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            street: ActiveValue::Set(self.street),
            street_number: ActiveValue::Set(self.street_number),
            postal_code: ActiveValue::Set(self.postal_code),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values.
///
/// Shorthand for `AddressFactory::new(db).build().await`.
pub async fn create_address(db: &DatabaseConnection) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db).build().await
}
