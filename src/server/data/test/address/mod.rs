use crate::server::{
    data::address::AddressRepository,
    model::address::{CreateAddressParam, UpdateAddressParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

fn create_param() -> CreateAddressParam {
    CreateAddressParam {
        street: "Storgatan".to_string(),
        street_number: "12".to_string(),
        postal_code: "41101".to_string(),
        city: "Göteborg".to_string(),
        country: "Sweden".to_string(),
    }
}
