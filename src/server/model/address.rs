//! Domain & parameter models for address operations

use crate::model::address::{AddressDto, CreateAddressDto, UpdateAddressDto};

/// The address domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub street_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl Address {
    /// Converts an entity model to the address domain model
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            street: entity.street,
            street_number: entity.street_number,
            postal_code: entity.postal_code,
            city: entity.city,
            country: entity.country,
        }
    }

    /// Formats the address on one line as `"{street} {number}, {postal code} {city}"`.
    pub fn display_name(&self) -> String {
        format_address(
            &self.street,
            &self.street_number,
            &self.postal_code,
            &self.city,
        )
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            id: self.id,
            street: self.street,
            street_number: self.street_number,
            postal_code: self.postal_code,
            city: self.city,
            country: self.country,
        }
    }
}

/// Formats address parts on one line, e.g. `"Storgatan 1, 41101 Göteborg"`.
pub fn format_address(street: &str, street_number: &str, postal_code: &str, city: &str) -> String {
    format!("{} {}, {} {}", street, street_number, postal_code, city)
}

/// Parameters for creating a new address
#[derive(Debug, Clone)]
pub struct CreateAddressParam {
    pub street: String,
    pub street_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl CreateAddressParam {
    pub fn from_dto(dto: CreateAddressDto) -> Self {
        Self {
            street: dto.street,
            street_number: dto.street_number,
            postal_code: dto.postal_code,
            city: dto.city,
            country: dto.country,
        }
    }
}

/// Parameters for updating an existing address, identified by `id`
#[derive(Debug, Clone)]
pub struct UpdateAddressParam {
    pub id: i32,
    pub street: String,
    pub street_number: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl UpdateAddressParam {
    pub fn from_dto(dto: UpdateAddressDto) -> Self {
        Self {
            id: dto.id,
            street: dto.street,
            street_number: dto.street_number,
            postal_code: dto.postal_code,
            city: dto.city,
            country: dto.country,
        }
    }
}
