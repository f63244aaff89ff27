use crate::{
    client::model::error::ApiError,
    model::address::{AddressDto, CreateAddressDto},
};

use super::helper::{api_url, get, parse_response, post, send_request, serialize_json};

pub async fn get_address(id: i32) -> Result<AddressDto, ApiError> {
    let response = send_request(get(&api_url(&format!("Address/{}", id)))).await?;
    parse_response(response).await
}

/// Creates an address and returns its id
pub async fn create_address(payload: &CreateAddressDto) -> Result<i32, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post(&api_url("Address")).body(body)).await?;
    parse_response(response).await
}
