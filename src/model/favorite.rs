use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::item::ItemDto;

/// The closed set of item kinds a user can favorite.
///
/// Each kind maps to its own item table and its own favorite relation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    People,
    Planet,
    Starship,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [
        FavoriteKind::People,
        FavoriteKind::Planet,
        FavoriteKind::Starship,
    ];

    /// Parses the plural path segment used by the add-favorite routes
    /// (`peoples`, `planets`, `starships`).
    pub fn from_plural(segment: &str) -> Option<Self> {
        match segment {
            "peoples" => Some(Self::People),
            "planets" => Some(Self::Planet),
            "starships" => Some(Self::Starship),
            _ => None,
        }
    }

    /// Parses the singular path segment used by the remove-favorite routes
    /// (`people`, `planet`, `starship`).
    pub fn from_singular(segment: &str) -> Option<Self> {
        match segment {
            "people" => Some(Self::People),
            "planet" => Some(Self::Planet),
            "starship" => Some(Self::Starship),
            _ => None,
        }
    }

    /// Capitalized noun used in response messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::People => "Person",
            Self::Planet => "Planet",
            Self::Starship => "Starship",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::People => "people",
            Self::Planet => "planet",
            Self::Starship => "starship",
        };
        f.write_str(name)
    }
}

/// One favorite relation together with the item it points to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    /// ID of the relation row
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub item_id: i32,
    /// The referenced item, `null` only if the row is dangling
    pub item: Option<ItemDto>,
}

/// The three favorite lists of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserFavoritesDto {
    pub favorites_peoples: Vec<FavoriteDto>,
    pub favorites_planets: Vec<FavoriteDto>,
    pub favorites_starships: Vec<FavoriteDto>,
}

/// Request body for adding a favorite.
///
/// `planet_id` is only read by the planets route, which requires it in addition
/// to the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddFavoriteDto {
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
}

/// Request body for removing a favorite.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RemoveFavoriteDto {
    pub user_id: Option<i32>,
}

/// Query string of `GET /users/favorites`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserFavoritesQuery {
    /// ID of the user whose favorites are requested
    pub user_id: Option<i32>,
}
