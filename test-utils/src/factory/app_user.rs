//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern. The user name always mirrors the email.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::app_user::AppUserFactory;
///
/// let user = AppUserFactory::new(&db, address.id)
///     .email("ada@westcoast.se")
///     .first_name("Ada")
///     .last_name("Lovelace")
///     .build()
///     .await?;
/// ```
pub struct AppUserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    phone_number: Option<String>,
    first_name: String,
    last_name: String,
    address_id: i32,
}

impl<'a> AppUserFactory<'a> {
    /// Creates a new AppUserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user-{id}"` where id is auto-incremented
    /// - email: `"user{id}@westcoast.se"`
    /// - phone_number: `None`
    /// - first_name: `"First{id}"`
    /// - last_name: `"Last{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `address_id` - ID of the address the user lives at
    ///
    /// # Returns
    /// - `AppUserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, address_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("user-{}", id),
            email: format!("user{}@westcoast.se", id),
            phone_number: None,
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            address_id,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::app_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::app_user::Model, DbErr> {
        entity::app_user::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_name: ActiveValue::Set(self.email.clone()),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            address_id: ActiveValue::Set(self.address_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values living at the given address.
///
/// Shorthand for `AppUserFactory::new(db, address_id).build().await`.
pub async fn create_app_user(
    db: &DatabaseConnection,
    address_id: i32,
) -> Result<entity::app_user::Model, DbErr> {
    AppUserFactory::new(db, address_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::address::create_address};

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let address = create_address(db).await?;
        let user = create_app_user(db, address.id).await?;

        assert!(!user.id.is_empty());
        assert_eq!(user.user_name, user.email);
        assert_eq!(user.address_id, address.id);
        assert!(user.phone_number.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let address = create_address(db).await?;
        let user1 = create_app_user(db, address.id).await?;
        let user2 = create_app_user(db, address.id).await?;

        assert_ne!(user1.id, user2.id);
        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
