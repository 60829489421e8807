//! Item data repository for people, planets and starships.
//!
//! The three item tables share their columns. Every method takes the `FavoriteKind`
//! naming the table and dispatches to the matching SeaORM entity.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::favorite::FavoriteKind,
    server::model::item::{CreateItemParams, Item},
};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an item into the table for `params.kind`.
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, DbErr> {
        let item = match params.kind {
            FavoriteKind::People => Item::from_people(
                entity::people::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    comment_text: ActiveValue::Set(params.comment_text),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            FavoriteKind::Planet => Item::from_planet(
                entity::planet::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    comment_text: ActiveValue::Set(params.comment_text),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            FavoriteKind::Starship => Item::from_starship(
                entity::starship::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    comment_text: ActiveValue::Set(params.comment_text),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
        };

        Ok(item)
    }

    /// Finds an item of the given kind by ID.
    pub async fn find_by_id(&self, kind: FavoriteKind, id: i32) -> Result<Option<Item>, DbErr> {
        let item = match kind {
            FavoriteKind::People => entity::prelude::People::find_by_id(id)
                .one(self.db)
                .await?
                .map(Item::from_people),
            FavoriteKind::Planet => entity::prelude::Planet::find_by_id(id)
                .one(self.db)
                .await?
                .map(Item::from_planet),
            FavoriteKind::Starship => entity::prelude::Starship::find_by_id(id)
                .one(self.db)
                .await?
                .map(Item::from_starship),
        };

        Ok(item)
    }

    /// Checks whether an item of the given kind exists.
    pub async fn exists(&self, kind: FavoriteKind, id: i32) -> Result<bool, DbErr> {
        let count = match kind {
            FavoriteKind::People => {
                entity::prelude::People::find()
                    .filter(entity::people::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
            FavoriteKind::Planet => {
                entity::prelude::Planet::find()
                    .filter(entity::planet::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
            FavoriteKind::Starship => {
                entity::prelude::Starship::find()
                    .filter(entity::starship::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }

    /// Gets every item of the given kind ordered by ID.
    pub async fn get_all(&self, kind: FavoriteKind) -> Result<Vec<Item>, DbErr> {
        let items = match kind {
            FavoriteKind::People => entity::prelude::People::find()
                .order_by_asc(entity::people::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(Item::from_people)
                .collect(),
            FavoriteKind::Planet => entity::prelude::Planet::find()
                .order_by_asc(entity::planet::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(Item::from_planet)
                .collect(),
            FavoriteKind::Starship => entity::prelude::Starship::find()
                .order_by_asc(entity::starship::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(Item::from_starship)
                .collect(),
        };

        Ok(items)
    }

    /// Deletes the item row only.
    ///
    /// Favorite rows referencing the item must already have been removed by the caller.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    pub async fn delete(&self, kind: FavoriteKind, id: i32) -> Result<u64, DbErr> {
        let result = match kind {
            FavoriteKind::People => entity::prelude::People::delete_by_id(id).exec(self.db).await?,
            FavoriteKind::Planet => entity::prelude::Planet::delete_by_id(id).exec(self.db).await?,
            FavoriteKind::Starship => {
                entity::prelude::Starship::delete_by_id(id)
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected)
    }
}
