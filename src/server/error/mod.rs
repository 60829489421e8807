//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod favorite;
pub mod item;
pub mod user;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{
        config::ConfigError, favorite::FavoriteError, item::ItemError, user::UserError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain errors (`ValidationErr`, `UserErr`,
/// `ItemErr`, `FavoriteErr`) handle their own response mapping, while storage and
/// infrastructure failures all become a generic 500 response.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing or malformed request input.
    ///
    /// Delegates to `ValidationError::into_response()` (400 Bad Request).
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// User lookup or uniqueness error.
    ///
    /// Delegates to `UserError::into_response()` (404 or 400).
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// People, planet or starship lookup error.
    ///
    /// Delegates to `ItemError::into_response()` (404).
    #[error(transparent)]
    ItemErr(#[from] ItemError),

    /// Favorite relation error.
    ///
    /// Delegates to `FavoriteError::into_response()` (400 or 404).
    #[error(transparent)]
    FavoriteErr(#[from] FavoriteError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    /// Any open transaction has already been rolled back when this is returned.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket or filesystem error while serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Route matched but a path segment names nothing we serve.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Domain errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For validation errors, duplicate email and duplicate favorites
/// - 404 Not Found - For missing users, items, favorites and unknown kinds
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::UserErr(err) => err.into_response(),
            Self::ItemErr(err) => err.into_response(),
            Self::FavoriteErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                generic_internal_error()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        generic_internal_error()
    }
}

/// The body every 500 response carries, regardless of the underlying failure.
fn generic_internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageDto::new("Internal server error")),
    )
        .into_response()
}
