use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::favorite::FavoriteKind,
    server::{
        data::{favorite::FavoriteRepository, item::ItemRepository},
        error::{item::ItemError, AppError},
        model::item::{CreateItemParams, Item},
    },
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an item of the given kind.
    ///
    /// # Returns
    /// - `Ok(Item)` - The item
    /// - `Err(AppError::ItemErr(ItemError::NotFound))` - No item of this kind with this ID
    pub async fn get_by_id(&self, kind: FavoriteKind, id: i32) -> Result<Item, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(kind, id)
            .await?
            .ok_or(ItemError::NotFound { kind, id })?;

        Ok(item)
    }

    /// Gets every item of the given kind.
    pub async fn get_all(&self, kind: FavoriteKind) -> Result<Vec<Item>, AppError> {
        Ok(ItemRepository::new(self.db).get_all(kind).await?)
    }

    /// Creates an item in the table for `params.kind`.
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, AppError> {
        let item = ItemRepository::new(self.db).create(params).await?;

        tracing::debug!("Created {} {}", item.kind, item.id);

        Ok(item)
    }

    /// Deletes an item and every favorite pointing at it, in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Item and its favorites removed
    /// - `Err(AppError::ItemErr(ItemError::NotFound))` - No item of this kind with this ID
    pub async fn delete(&self, kind: FavoriteKind, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let item_repo = ItemRepository::new(&txn);

        if !item_repo.exists(kind, id).await? {
            return Err(ItemError::NotFound { kind, id }.into());
        }

        let removed = FavoriteRepository::new(&txn)
            .delete_by_item(kind, id)
            .await?;
        item_repo.delete(kind, id).await?;

        txn.commit().await?;

        tracing::debug!("Deleted {} {} and {} favorites", kind, id, removed);

        Ok(())
    }
}
