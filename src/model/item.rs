use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A person, planet or starship record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub comment_text: String,
}

/// Request body for creating a person, planet or starship.
///
/// Fields are optional at the wire level so a missing field is reported as a
/// validation error naming the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateItemDto {
    pub name: Option<String>,
    pub comment_text: Option<String>,
}
