use crate::client::model::error::ApiError;
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Base path of the REST API
pub const API_BASE: &str = "/api";

/// Builds an absolute API url from a resource path such as `Course/ByCategory/3`
pub fn api_url(path: &str) -> String {
    format!("{}/{}", API_BASE, path)
}

/// Reads the plain-text error message of a failed response.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = response
        .text()
        .await
        .ok()
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "Unknown error".to_string());

    ApiError::new(status, message)
}

/// Parses a JSON success body or converts the failure into an `ApiError`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::new(500, format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Accepts any 2xx response without reading its body (used for 204 No Content)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

pub fn get(url: &str) -> Request {
    Request::get(url)
}

pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Send a request and handle transport errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::new(500, format!("Failed to send request: {}", e)))
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::new(500, format!("Failed to serialize request: {}", e)))
}
