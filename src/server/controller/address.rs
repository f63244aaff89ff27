use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::address::{AddressDto, CreateAddressDto, UpdateAddressDto},
    server::{
        error::AppError,
        model::address::{Address, CreateAddressParam, UpdateAddressParam},
        service::address::AddressService,
        state::AppState,
    },
};

pub static ADDRESS_TAG: &str = "Address";

#[utoipa::path(
    get,
    path = "/api/Address",
    tag = ADDRESS_TAG,
    responses(
        (status = 200, description = "All addresses", body = Vec<AddressDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_all_addresses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let addresses = AddressService::new(&state.db).get_all().await?;

    let dtos: Vec<AddressDto> = addresses.into_iter().map(Address::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/Address/{id}",
    tag = ADDRESS_TAG,
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "The address", body = AddressDto),
        (status = 404, description = "Address not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Fail: Find address with id {}", id)))?;

    Ok((StatusCode::OK, Json(address.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/Address",
    tag = ADDRESS_TAG,
    request_body = CreateAddressDto,
    responses(
        (status = 201, description = "ID of the created address", body = i32),
        (status = 500, description = "Failed to create the address", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<CreateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db)
        .create(CreateAddressParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Create address"))?;

    Ok((StatusCode::CREATED, Json(address.id)))
}

#[utoipa::path(
    put,
    path = "/api/Address",
    tag = ADDRESS_TAG,
    request_body = UpdateAddressDto,
    responses(
        (status = 200, description = "ID of the updated address", body = i32),
        (status = 404, description = "Address not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to update the address", body = String, content_type = "text/plain")
    ),
)]
pub async fn update_address(
    State(state): State<AppState>,
    Json(payload): Json<UpdateAddressDto>,
) -> Result<impl IntoResponse, AppError> {
    let address = AddressService::new(&state.db)
        .update(UpdateAddressParam::from_dto(payload))
        .await
        .map_err(|e| e.or_persistence("Fail: Update address"))?
        .ok_or_else(|| AppError::NotFound("Fail: Find address to update".to_string()))?;

    Ok((StatusCode::OK, Json(address.id)))
}

#[utoipa::path(
    delete,
    path = "/api/Address/{id}",
    tag = ADDRESS_TAG,
    params(
        ("id" = i32, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "Address not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Failed to delete the address", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = AddressService::new(&state.db)
        .delete(id)
        .await
        .map_err(|e| e.or_persistence("Fail: Delete address"))?;

    if !deleted {
        return Err(AppError::NotFound("Fail: Find address to delete".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
