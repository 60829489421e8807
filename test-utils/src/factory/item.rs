//! Item factory for creating people, planet and starship rows.
//!
//! The three item tables share the same columns, so a single builder carries the
//! values and each `build_*` method inserts into one table.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating favoritable items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item::ItemFactory;
///
/// let luke = ItemFactory::new(&db)
///     .name("Luke Skywalker")
///     .comment_text("Jedi Knight")
///     .build_people()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    comment_text: String,
}

impl<'a> ItemFactory<'a> {
    /// Creates a new ItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Item {id}"` where id is auto-incremented
    /// - comment_text: `"Comment {id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Item {}", id),
            comment_text: format!("Comment {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn comment_text(mut self, comment_text: impl Into<String>) -> Self {
        self.comment_text = comment_text.into();
        self
    }

    pub async fn build_people(self) -> Result<entity::people::Model, DbErr> {
        entity::people::ActiveModel {
            name: ActiveValue::Set(self.name),
            comment_text: ActiveValue::Set(self.comment_text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn build_planet(self) -> Result<entity::planet::Model, DbErr> {
        entity::planet::ActiveModel {
            name: ActiveValue::Set(self.name),
            comment_text: ActiveValue::Set(self.comment_text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn build_starship(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            name: ActiveValue::Set(self.name),
            comment_text: ActiveValue::Set(self.comment_text),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a people row with default values.
pub async fn create_people(db: &DatabaseConnection) -> Result<entity::people::Model, DbErr> {
    ItemFactory::new(db).build_people().await
}

/// Creates a planet row with default values.
pub async fn create_planet(db: &DatabaseConnection) -> Result<entity::planet::Model, DbErr> {
    ItemFactory::new(db).build_planet().await
}

/// Creates a starship row with default values.
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    ItemFactory::new(db).build_starship().await
}
