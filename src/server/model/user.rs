//! User domain models and parameters.
//!
//! A `User` carries no password. The stored column is only read and written through
//! `Password`, so no view built from these types can ever expose it.

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        error::validation::ValidationError,
        model::favorite::UserFavorites,
        util::{password::Password, request::required_text},
    },
};

/// An application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique across all users.
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password column is dropped here.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            is_active: entity.is_active,
        }
    }
}

/// A user together with their three favorite lists.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithFavorites {
    pub user: User,
    pub favorites: UserFavorites,
}

impl UserWithFavorites {
    /// Converts the aggregate into the serialized user view.
    ///
    /// # Returns
    /// - `UserDto` - id, email, active flag and the three favorite lists
    pub fn into_dto(self) -> UserDto {
        let favorites = self.favorites.into_dto();

        UserDto {
            id: self.user.id,
            email: self.user.email,
            is_active: self.user.is_active,
            favorites_peoples: favorites.favorites_peoples,
            favorites_planets: favorites.favorites_planets,
            favorites_starships: favorites.favorites_starships,
        }
    }
}

/// Validated input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password: Password,
    pub is_active: bool,
}

impl CreateUserParams {
    /// Validates a create request.
    ///
    /// New users are always active.
    ///
    /// # Arguments
    /// - `dto` - The request body
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Email and password are present and non-blank
    /// - `Err(ValidationError::MissingField)` - Email or password missing or blank
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        let email = required_text(dto.email, "email")?;
        let password = match dto.password {
            Some(password) if !password.is_empty() => Password::new(password),
            _ => return Err(ValidationError::MissingField("password")),
        };

        Ok(Self {
            email,
            password,
            is_active: true,
        })
    }
}
