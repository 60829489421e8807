//! Favoritable item domain models and parameters.
//!
//! People, planets and starships share one shape, so a single `Item` tagged with its
//! `FavoriteKind` represents a row from any of the three tables.

use crate::{
    model::{
        favorite::FavoriteKind,
        item::{CreateItemDto, ItemDto},
    },
    server::{error::validation::ValidationError, util::request::required_text},
};

/// A person, planet or starship.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: FavoriteKind,
    pub id: i32,
    pub name: String,
    pub comment_text: String,
}

impl Item {
    pub fn from_people(entity: entity::people::Model) -> Self {
        Self {
            kind: FavoriteKind::People,
            id: entity.id,
            name: entity.name,
            comment_text: entity.comment_text,
        }
    }

    pub fn from_planet(entity: entity::planet::Model) -> Self {
        Self {
            kind: FavoriteKind::Planet,
            id: entity.id,
            name: entity.name,
            comment_text: entity.comment_text,
        }
    }

    pub fn from_starship(entity: entity::starship::Model) -> Self {
        Self {
            kind: FavoriteKind::Starship,
            id: entity.id,
            name: entity.name,
            comment_text: entity.comment_text,
        }
    }

    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            comment_text: self.comment_text,
        }
    }
}

/// Validated input for creating an item of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateItemParams {
    pub kind: FavoriteKind,
    pub name: String,
    pub comment_text: String,
}

impl CreateItemParams {
    /// Validates a create request for the given kind.
    ///
    /// Name and comment text are required and non-blank for every kind.
    ///
    /// # Arguments
    /// - `kind` - Table the item will be inserted into
    /// - `dto` - The request body
    ///
    /// # Returns
    /// - `Ok(CreateItemParams)` - Validated, trimmed input
    /// - `Err(ValidationError::MissingField)` - `name` or `comment_text` missing or blank
    pub fn from_dto(kind: FavoriteKind, dto: CreateItemDto) -> Result<Self, ValidationError> {
        Ok(Self {
            kind,
            name: required_text(dto.name, "name")?,
            comment_text: required_text(dto.comment_text, "comment_text")?,
        })
    }
}
