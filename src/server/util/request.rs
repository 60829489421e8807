//! Helpers for turning optional request input into validated values.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query},
    Json,
};

use crate::server::error::validation::ValidationError;

/// Unwraps a JSON body extraction.
///
/// Handlers take `Result<Json<T>, JsonRejection>` so an absent or malformed body
/// answers with the API's `{"msg": ...}` shape instead of axum's plain text. A body
/// that parses as JSON but does not fit `T` is reported as invalid rather than missing.
pub fn require_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    payload.map(|Json(body)| body).map_err(|rejection| match rejection {
        JsonRejection::JsonDataError(e) => ValidationError::InvalidBody(e.body_text()),
        JsonRejection::JsonSyntaxError(e) => ValidationError::InvalidBody(e.body_text()),
        _ => ValidationError::MissingBody,
    })
}

/// Unwraps a path extraction, reporting unparsable segments.
pub fn require_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ValidationError> {
    path.map(|Path(value)| value)
        .map_err(|e| ValidationError::InvalidPath(e.body_text()))
}

/// Unwraps a query string extraction, reporting the rejection reason.
pub fn require_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ValidationError> {
    query
        .map(|Query(query)| query)
        .map_err(|e| ValidationError::InvalidQuery(e.body_text()))
}

/// Returns the field value or a `MissingField` error naming it.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Returns the trimmed string or a `MissingField` error if it is absent or blank.
pub fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}
