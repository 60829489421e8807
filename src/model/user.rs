use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::favorite::FavoriteDto;

/// A user together with every favorite they hold.
///
/// The stored password is never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub favorites_peoples: Vec<FavoriteDto>,
    pub favorites_planets: Vec<FavoriteDto>,
    pub favorites_starships: Vec<FavoriteDto>,
}

/// Response body of `GET /user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub msg: String,
    pub users: Vec<UserDto>,
}

/// Request body for creating a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
}
