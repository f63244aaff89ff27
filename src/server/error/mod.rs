//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion, while the message variants carry the text returned to the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure reported by a controller.
    ///
    /// Results in 500 Internal Server Error. The message (e.g. `Fail: Create appUser`)
    /// is returned to the client while the underlying cause is logged.
    #[error("{message}: {source}")]
    PersistenceFailed {
        /// Client-facing description of the failed operation
        message: String,
        /// The database error that caused the failure
        #[source]
        source: sea_orm::DbErr,
    },
}

impl AppError {
    /// Wraps a database error as a persistence failure with a client-facing message.
    pub fn persistence(message: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::PersistenceFailed {
            message: message.into(),
            source,
        }
    }

    /// Replaces a database error with a persistence failure carrying `message`.
    ///
    /// Other variants pass through unchanged.
    pub fn or_persistence(self, message: impl Into<String>) -> Self {
        match self {
            Self::DbErr(source) => Self::persistence(message, source),
            other => other,
        }
    }
}

/// Converts application errors into plain-text HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For persistence failures and all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::PersistenceFailed { message, source } => {
                tracing::error!("{}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sea_orm::DbErr;

    #[test]
    fn or_persistence_wraps_database_errors() {
        let err = AppError::DbErr(DbErr::Custom("disk full".to_string()))
            .or_persistence("Fail: Create course");

        match err {
            AppError::PersistenceFailed { message, source } => {
                assert_eq!(message, "Fail: Create course");
                assert_eq!(source, DbErr::Custom("disk full".to_string()));
            }
            other => panic!("expected a persistence failure, got {:?}", other),
        }
    }

    #[test]
    fn or_persistence_keeps_not_found() {
        let err = AppError::NotFound("Fail: Find course to update".to_string())
            .or_persistence("Fail: Update course");

        assert!(matches!(err, AppError::NotFound(msg) if msg == "Fail: Find course to update"));
    }

    #[test]
    fn config_errors_map_to_internal_server_error() {
        let response =
            AppError::ConfigErr(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
