use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug, PartialEq)]
pub enum UserError {
    /// No user row exists with the given ID.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} not found")]
    NotFound(i32),

    /// Another user already registered this email.
    ///
    /// Results in a 400 Bad Request response, matching the status the API has
    /// always returned for this case.
    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),
}

/// Converts user errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound`
/// - 400 Bad Request - For `DuplicateEmail`
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageDto::new("User not found")),
            )
                .into_response(),
            Self::DuplicateEmail(_) => (
                StatusCode::BAD_REQUEST,
                Json(MessageDto::new("A user with this email already exists")),
            )
                .into_response(),
        }
    }
}
