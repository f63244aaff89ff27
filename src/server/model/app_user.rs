//! Domain & parameter models for user operations
//!
//! Defines the user domain model together with its formatted address, the create and
//! update parameters, and conversions from entities and into DTOs. The user name of a
//! user always mirrors its email; the parameters therefore carry only the email.

use crate::{
    model::app_user::{AppUserDto, CreateAppUserDto, UpdateAppUserDto},
    server::model::address::format_address,
};

/// The user domain model
///
/// Holds the personal fields of a user along with the one-line name of the address the
/// user lives at.
#[derive(Debug, Clone, PartialEq)]
pub struct AppUser {
    pub id: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address_id: i32,
    pub address_name: String,
}

impl AppUser {
    /// Converts a user entity and its optionally loaded address to the domain model
    ///
    /// # Arguments
    /// - `entity` - The user entity model from the database
    /// - `address` - The address the user references, if it was loaded
    ///
    /// # Returns
    /// - `AppUser` - The domain model; `address_name` is empty when no address was loaded
    pub fn from_entity(
        entity: entity::app_user::Model,
        address: Option<entity::address::Model>,
    ) -> Self {
        let address_name = address
            .map(|a| format_address(&a.street, &a.street_number, &a.postal_code, &a.city))
            .unwrap_or_default();

        Self {
            id: entity.id,
            email: entity.email,
            phone_number: entity.phone_number,
            first_name: entity.first_name,
            last_name: entity.last_name,
            address_id: entity.address_id,
            address_name,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts the domain model into the user DTO
    pub fn into_dto(self) -> AppUserDto {
        AppUserDto {
            id: self.id,
            email: self.email,
            phone_number: self.phone_number,
            first_name: self.first_name,
            last_name: self.last_name,
            address_name: self.address_name,
            address_id: self.address_id,
        }
    }
}

/// Parameters for creating a new user
///
/// `role_name`, when present, is assigned once the user row exists.
#[derive(Debug, Clone)]
pub struct CreateAppUserParam {
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address_id: i32,
    pub role_name: Option<String>,
}

impl CreateAppUserParam {
    pub fn from_dto(dto: CreateAppUserDto) -> Self {
        Self {
            email: dto.email,
            phone_number: dto.phone_number,
            first_name: dto.first_name,
            last_name: dto.last_name,
            address_id: dto.address_id,
            role_name: dto.role_name,
        }
    }
}

/// Parameters for updating an existing user
///
/// `role_name`, when present, replaces every role the user currently holds.
#[derive(Debug, Clone)]
pub struct UpdateAppUserParam {
    pub id: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub address_id: i32,
    pub role_name: Option<String>,
}

impl UpdateAppUserParam {
    pub fn from_dto(dto: UpdateAppUserDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            phone_number: dto.phone_number,
            first_name: dto.first_name,
            last_name: dto.last_name,
            address_id: dto.address_id,
            role_name: dto.role_name,
        }
    }
}
