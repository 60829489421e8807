//! Favorite relation domain models and parameters.
//!
//! A favorite links one user to one item of one kind. The three relation tables are
//! structurally identical, so every row is represented by the same `Favorite` type
//! regardless of the table it was read from.

use crate::{
    model::favorite::{AddFavoriteDto, FavoriteDto, FavoriteKind, RemoveFavoriteDto, UserFavoritesDto},
    server::{
        error::validation::ValidationError, model::item::Item, util::request::required,
    },
};

/// A favorite relation row and the item it references.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    /// ID of the relation row.
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub item_id: i32,
    /// The referenced item. `None` only if the item row disappeared underneath the relation.
    pub item: Option<Item>,
}

impl Favorite {
    /// Converts a `favorite_peoples` row and its joined person.
    pub fn from_people(
        entity: entity::favorite_people::Model,
        item: Option<entity::people::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: FavoriteKind::People,
            item_id: entity.peoples_id,
            item: item.map(Item::from_people),
        }
    }

    /// Converts a `favorite_planets` row and its joined planet.
    pub fn from_planet(
        entity: entity::favorite_planet::Model,
        item: Option<entity::planet::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: FavoriteKind::Planet,
            item_id: entity.planets_id,
            item: item.map(Item::from_planet),
        }
    }

    /// Converts a `favorite_starships` row and its joined starship.
    pub fn from_starship(
        entity: entity::favorite_starship::Model,
        item: Option<entity::starship::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: FavoriteKind::Starship,
            item_id: entity.starships_id,
            item: item.map(Item::from_starship),
        }
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            kind: self.kind,
            item_id: self.item_id,
            item: self.item.map(Item::into_dto),
        }
    }
}

/// A user's favorites split into one list per kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFavorites {
    pub peoples: Vec<Favorite>,
    pub planets: Vec<Favorite>,
    pub starships: Vec<Favorite>,
}

impl UserFavorites {
    /// Appends a favorite to the list matching its kind.
    pub fn push(&mut self, favorite: Favorite) {
        self.list_mut(favorite.kind).push(favorite);
    }

    /// Replaces the list for one kind.
    pub fn set(&mut self, kind: FavoriteKind, favorites: Vec<Favorite>) {
        *self.list_mut(kind) = favorites;
    }

    #[cfg(test)]
    pub fn get(&self, kind: FavoriteKind) -> &[Favorite] {
        match kind {
            FavoriteKind::People => &self.peoples,
            FavoriteKind::Planet => &self.planets,
            FavoriteKind::Starship => &self.starships,
        }
    }

    fn list_mut(&mut self, kind: FavoriteKind) -> &mut Vec<Favorite> {
        match kind {
            FavoriteKind::People => &mut self.peoples,
            FavoriteKind::Planet => &mut self.planets,
            FavoriteKind::Starship => &mut self.starships,
        }
    }

    pub fn into_dto(self) -> UserFavoritesDto {
        UserFavoritesDto {
            favorites_peoples: self.peoples.into_iter().map(Favorite::into_dto).collect(),
            favorites_planets: self.planets.into_iter().map(Favorite::into_dto).collect(),
            favorites_starships: self
                .starships
                .into_iter()
                .map(Favorite::into_dto)
                .collect(),
        }
    }
}

/// Validated input for adding a favorite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddFavoriteParams {
    pub kind: FavoriteKind,
    pub user_id: i32,
    pub item_id: i32,
}

impl AddFavoriteParams {
    /// Validates an add request.
    ///
    /// The planets route also requires `planet_id` in the body, and it must name the
    /// same planet as the path.
    ///
    /// # Arguments
    /// - `kind` - Kind taken from the route
    /// - `item_id` - Item ID taken from the path
    /// - `dto` - The request body
    ///
    /// # Returns
    /// - `Ok(AddFavoriteParams)` - All required fields are present
    /// - `Err(ValidationError::MissingField)` - `user_id` (or `planet_id` for planets) missing
    /// - `Err(ValidationError::Mismatch)` - `planet_id` differs from the path id
    pub fn from_dto(
        kind: FavoriteKind,
        item_id: i32,
        dto: AddFavoriteDto,
    ) -> Result<Self, ValidationError> {
        let user_id = required(dto.user_id, "user_id")?;

        if kind == FavoriteKind::Planet {
            let planet_id = required(dto.planet_id, "planet_id")?;
            if planet_id != item_id {
                return Err(ValidationError::Mismatch { field: "planet_id" });
            }
        }

        Ok(Self {
            kind,
            user_id,
            item_id,
        })
    }
}

/// Validated input for removing a favorite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemoveFavoriteParams {
    pub kind: FavoriteKind,
    pub user_id: i32,
    pub item_id: i32,
}

impl RemoveFavoriteParams {
    pub fn from_dto(
        kind: FavoriteKind,
        item_id: i32,
        dto: RemoveFavoriteDto,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            kind,
            user_id: required(dto.user_id, "user_id")?,
            item_id,
        })
    }
}
