use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Message body used for plain success responses and for every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    /// Human readable message
    pub msg: String,
}

impl MessageDto {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Response for operations that create a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedDto {
    pub msg: String,
    /// ID of the created row
    pub id: i32,
}
