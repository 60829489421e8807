//! Favorite relation repository.
//!
//! Favorites live in three structurally identical tables, one per `FavoriteKind`. This
//! repository is the only place that maps a kind to its table and item column; every
//! method takes the kind and dispatches to the matching SeaORM entity. Reads join the
//! referenced item so callers always receive the full relation view.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{model::favorite::FavoriteKind, server::model::favorite::Favorite};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the relation linking `user_id` to `item_id` of the given kind.
    ///
    /// # Returns
    /// - `Ok(Some(Favorite))` - The relation with its item joined
    /// - `Ok(None)` - The user has not favorited this item
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        item_id: i32,
    ) -> Result<Option<Favorite>, DbErr> {
        let favorite = match kind {
            FavoriteKind::People => entity::prelude::FavoritePeople::find()
                .filter(entity::favorite_people::Column::UserId.eq(user_id))
                .filter(entity::favorite_people::Column::PeoplesId.eq(item_id))
                .find_also_related(entity::prelude::People)
                .one(self.db)
                .await?
                .map(|(relation, item)| Favorite::from_people(relation, item)),
            FavoriteKind::Planet => entity::prelude::FavoritePlanet::find()
                .filter(entity::favorite_planet::Column::UserId.eq(user_id))
                .filter(entity::favorite_planet::Column::PlanetsId.eq(item_id))
                .find_also_related(entity::prelude::Planet)
                .one(self.db)
                .await?
                .map(|(relation, item)| Favorite::from_planet(relation, item)),
            FavoriteKind::Starship => entity::prelude::FavoriteStarship::find()
                .filter(entity::favorite_starship::Column::UserId.eq(user_id))
                .filter(entity::favorite_starship::Column::StarshipsId.eq(item_id))
                .find_also_related(entity::prelude::Starship)
                .one(self.db)
                .await?
                .map(|(relation, item)| Favorite::from_starship(relation, item)),
        };

        Ok(favorite)
    }

    /// Inserts a relation row.
    ///
    /// No duplicate check is made here. A second row for the same pair fails on the
    /// table's unique index, which the caller translates.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new relation row
    /// - `Err(DbErr)` - Database error, including unique and foreign key violations
    pub async fn create(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        item_id: i32,
    ) -> Result<i32, DbErr> {
        let id = match kind {
            FavoriteKind::People => {
                entity::favorite_people::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    peoples_id: ActiveValue::Set(item_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
            FavoriteKind::Planet => {
                entity::favorite_planet::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    planets_id: ActiveValue::Set(item_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
            FavoriteKind::Starship => {
                entity::favorite_starship::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    starships_id: ActiveValue::Set(item_id),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
                .id
            }
        };

        Ok(id)
    }

    /// Deletes the relation linking `user_id` to `item_id` of the given kind.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    pub async fn delete(
        &self,
        kind: FavoriteKind,
        user_id: i32,
        item_id: i32,
    ) -> Result<u64, DbErr> {
        let result = match kind {
            FavoriteKind::People => {
                entity::prelude::FavoritePeople::delete_many()
                    .filter(entity::favorite_people::Column::UserId.eq(user_id))
                    .filter(entity::favorite_people::Column::PeoplesId.eq(item_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_many()
                    .filter(entity::favorite_planet::Column::UserId.eq(user_id))
                    .filter(entity::favorite_planet::Column::PlanetsId.eq(item_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::delete_many()
                    .filter(entity::favorite_starship::Column::UserId.eq(user_id))
                    .filter(entity::favorite_starship::Column::StarshipsId.eq(item_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Gets a user's favorites of one kind, oldest first, with their items joined.
    pub async fn get_by_user(
        &self,
        kind: FavoriteKind,
        user_id: i32,
    ) -> Result<Vec<Favorite>, DbErr> {
        let favorites = match kind {
            FavoriteKind::People => entity::prelude::FavoritePeople::find()
                .filter(entity::favorite_people::Column::UserId.eq(user_id))
                .order_by_asc(entity::favorite_people::Column::Id)
                .find_also_related(entity::prelude::People)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(relation, item)| Favorite::from_people(relation, item))
                .collect(),
            FavoriteKind::Planet => entity::prelude::FavoritePlanet::find()
                .filter(entity::favorite_planet::Column::UserId.eq(user_id))
                .order_by_asc(entity::favorite_planet::Column::Id)
                .find_also_related(entity::prelude::Planet)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(relation, item)| Favorite::from_planet(relation, item))
                .collect(),
            FavoriteKind::Starship => entity::prelude::FavoriteStarship::find()
                .filter(entity::favorite_starship::Column::UserId.eq(user_id))
                .order_by_asc(entity::favorite_starship::Column::Id)
                .find_also_related(entity::prelude::Starship)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(relation, item)| Favorite::from_starship(relation, item))
                .collect(),
        };

        Ok(favorites)
    }

    /// Gets every favorite of one kind across all users, oldest first, with items joined.
    ///
    /// Used to build the user listing with a fixed number of queries.
    pub async fn get_all(&self, kind: FavoriteKind) -> Result<Vec<Favorite>, DbErr> {
        let favorites = match kind {
            FavoriteKind::People => entity::prelude::FavoritePeople::find()
                .order_by_asc(entity::favorite_people::Column::Id)
                .find_also_related(entity::prelude::People)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(relation, item)| Favorite::from_people(relation, item))
                .collect(),
            FavoriteKind::Planet => entity::prelude::FavoritePlanet::find()
                .order_by_asc(entity::favorite_planet::Column::Id)
                .find_also_related(entity::prelude::Planet)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(relation, item)| Favorite::from_planet(relation, item))
                .collect(),
            FavoriteKind::Starship => entity::prelude::FavoriteStarship::find()
                .order_by_asc(entity::favorite_starship::Column::Id)
                .find_also_related(entity::prelude::Starship)
                .all(self.db)
                .await?
                .into_iter()
                .map(|(relation, item)| Favorite::from_starship(relation, item))
                .collect(),
        };

        Ok(favorites)
    }

    /// Deletes every favorite of one kind held by a user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn delete_by_user(&self, kind: FavoriteKind, user_id: i32) -> Result<u64, DbErr> {
        let result = match kind {
            FavoriteKind::People => {
                entity::prelude::FavoritePeople::delete_many()
                    .filter(entity::favorite_people::Column::UserId.eq(user_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_many()
                    .filter(entity::favorite_planet::Column::UserId.eq(user_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::delete_many()
                    .filter(entity::favorite_starship::Column::UserId.eq(user_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }

    /// Deletes every favorite, from any user, pointing at one item.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    pub async fn delete_by_item(&self, kind: FavoriteKind, item_id: i32) -> Result<u64, DbErr> {
        let result = match kind {
            FavoriteKind::People => {
                entity::prelude::FavoritePeople::delete_many()
                    .filter(entity::favorite_people::Column::PeoplesId.eq(item_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::FavoritePlanet::delete_many()
                    .filter(entity::favorite_planet::Column::PlanetsId.eq(item_id))
                    .exec(self.db)
                    .await?
            }
            FavoriteKind::Starship => {
                entity::prelude::FavoriteStarship::delete_many()
                    .filter(entity::favorite_starship::Column::StarshipsId.eq(item_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }
}
