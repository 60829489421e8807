//! Favorite relation management.
//!
//! One algorithm serves every `FavoriteKind`. The kind only decides which table the
//! repositories touch, so the rules below hold identically for people, planets and
//! starships:
//!
//! - a user holds at most one favorite per item of a kind
//! - a favorite can only reference an existing user and an existing item
//! - a duplicate is reported as `FavoriteError::AlreadyFavorited` whether it is caught
//!   by the lookup before insert or by the unique index when two requests race

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::favorite::FavoriteKind,
    server::{
        data::{favorite::FavoriteRepository, item::ItemRepository, user::UserRepository},
        error::{favorite::FavoriteError, item::ItemError, user::UserError, AppError},
        model::favorite::{AddFavoriteParams, Favorite, RemoveFavoriteParams},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an item to a user's favorites.
    ///
    /// Runs in one transaction. Any error drops the transaction before commit, so a
    /// failed call never leaves a row behind.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the new relation row
    /// - `Err(AppError::UserErr(UserError::NotFound))` - No such user
    /// - `Err(AppError::ItemErr(ItemError::NotFound))` - No such item of this kind
    /// - `Err(AppError::FavoriteErr(FavoriteError::AlreadyFavorited))` - Relation exists
    /// - `Err(AppError::DbErr)` - Any other storage failure
    pub async fn add(&self, params: AddFavoriteParams) -> Result<i32, AppError> {
        let AddFavoriteParams {
            kind,
            user_id,
            item_id,
        } = params;

        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).exists(user_id).await? {
            return Err(UserError::NotFound(user_id).into());
        }

        if !ItemRepository::new(&txn).exists(kind, item_id).await? {
            return Err(ItemError::NotFound { kind, id: item_id }.into());
        }

        let repo = FavoriteRepository::new(&txn);

        if repo.find(kind, user_id, item_id).await?.is_some() {
            tracing::debug!("User {} already favorited {} {}", user_id, kind, item_id);
            return Err(already_favorited(params).into());
        }

        let id = match repo.create(kind, user_id, item_id).await {
            Ok(id) => id,
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    tracing::debug!(
                        "Concurrent favorite of {} {} by user {} rejected by unique index",
                        kind,
                        item_id,
                        user_id
                    );
                    return Err(already_favorited(params).into());
                }
                _ => return Err(err.into()),
            },
        };

        txn.commit().await?;

        tracing::debug!("User {} favorited {} {} as {}", user_id, kind, item_id, id);

        Ok(id)
    }

    /// Removes an item from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The relation row was deleted
    /// - `Err(AppError::FavoriteErr(FavoriteError::NotFound))` - No such relation
    pub async fn remove(&self, params: RemoveFavoriteParams) -> Result<(), AppError> {
        let RemoveFavoriteParams {
            kind,
            user_id,
            item_id,
        } = params;

        let txn = self.db.begin().await?;

        let deleted = FavoriteRepository::new(&txn)
            .delete(kind, user_id, item_id)
            .await?;

        if deleted == 0 {
            return Err(FavoriteError::NotFound {
                kind,
                user_id,
                item_id,
            }
            .into());
        }

        txn.commit().await?;

        tracing::debug!("User {} unfavorited {} {}", user_id, kind, item_id);

        Ok(())
    }

    /// Lists a user's favorites of one kind with their items.
    ///
    /// An unknown user simply has no favorites; callers that must report a missing
    /// user check for it first.
    ///
    /// # Returns
    /// - `Ok(Vec<Favorite>)` - Possibly empty list, oldest first
    pub async fn list_for_user(
        &self,
        kind: FavoriteKind,
        user_id: i32,
    ) -> Result<Vec<Favorite>, AppError> {
        Ok(FavoriteRepository::new(self.db)
            .get_by_user(kind, user_id)
            .await?)
    }
}

fn already_favorited(params: AddFavoriteParams) -> FavoriteError {
    FavoriteError::AlreadyFavorited {
        kind: params.kind,
        user_id: params.user_id,
        item_id: params.item_id,
    }
}
