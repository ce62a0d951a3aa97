//! Error types and HTTP response handling.
//!
//! This module provides the application's error taxonomy and the conversion logic for
//! transforming errors into HTTP responses. Repository and service operations report
//! failures as one of a small set of kinds (`InvalidInput`, `NotFound`, `StorageErr`,
//! `Conflict`); the `IntoResponse` implementation maps each kind to exactly one status
//! code with a plain-text body. Anything not explicitly matched becomes a 500.

pub mod config;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the domain error taxonomy together with the infrastructure errors that can
/// occur during startup and serving. Most infrastructure variants use `#[from]` for automatic
/// conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error outside of a repository operation (connecting, migrating, closing).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A repository operation failed in the storage layer.
    ///
    /// Results in 500 Internal Server Error. The context names the attempted operation
    /// and is logged together with the driver error; neither reaches the client.
    #[error("{context}: {source}")]
    StorageErr {
        /// What the repository was attempting
        context: String,
        /// The underlying driver error
        #[source]
        source: sea_orm::DbErr,
    },

    /// The request body was not valid JSON for the expected payload.
    ///
    /// Kept apart from `InvalidInput` since it is raised by the transport layer before
    /// the service is ever invoked. Results in 400 Bad Request.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Client supplied invalid data.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    InvalidInput(String),

    /// Referenced resource does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with the current state of a resource.
    ///
    /// No current operation produces it. Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Returns a closure wrapping a storage driver error with operation context.
    ///
    /// Intended for `map_err` at repository call sites:
    /// `.await.map_err(AppError::storage("failed to list quotes"))?`
    pub fn storage(context: impl Into<String>) -> impl FnOnce(sea_orm::DbErr) -> AppError {
        let context = context.into();
        move |source| AppError::StorageErr { context, source }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidInput` (message included) and `MalformedBody`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` (message included)
/// - 500 Internal Server Error - For all other error types, logged server-side
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidInput(msg) => {
                tracing::info!("Invalid input: {}", msg);
                (StatusCode::BAD_REQUEST, format!("Bad Request: {}", msg)).into_response()
            }
            Self::MalformedBody(rejection) => {
                tracing::info!("Invalid JSON payload: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, "Bad Request").into_response()
            }
            Self::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            Self::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (StatusCode::CONFLICT, format!("Conflict: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal Server Error" body
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {}", self.0);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
