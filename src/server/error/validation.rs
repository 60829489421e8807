use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

/// Request input problems the caller can correct.
///
/// Always detected before any storage call is made.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// No parsable JSON body was sent.
    #[error("A JSON body is required")]
    MissingBody,

    /// A body was sent but a field has the wrong type or the JSON is malformed.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// A required field is absent or blank.
    #[error("The \"{0}\" field is required")]
    MissingField(&'static str),

    /// A body field disagrees with the path parameter it duplicates.
    #[error("The \"{field}\" field must match the id in the path")]
    Mismatch {
        /// Name of the offending field
        field: &'static str,
    },

    /// A path segment could not be parsed, such as a non-numeric id.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// The query string could not be parsed.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),
}

/// Converts validation errors into 400 Bad Request responses.
///
/// The error text is safe to return as-is since it only names request fields.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(MessageDto::new(self.to_string()))).into_response()
    }
}
