//! Favorite factory for inserting favorite relation rows directly.
//!
//! These bypass the application's duplicate check, which makes them useful for
//! seeding state and for asserting on the storage-level unique index.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a `favorite_peoples` row linking `user_id` to `peoples_id`.
pub async fn create_favorite_people(
    db: &DatabaseConnection,
    user_id: i32,
    peoples_id: i32,
) -> Result<entity::favorite_people::Model, DbErr> {
    entity::favorite_people::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        peoples_id: ActiveValue::Set(peoples_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a `favorite_planets` row linking `user_id` to `planets_id`.
pub async fn create_favorite_planet(
    db: &DatabaseConnection,
    user_id: i32,
    planets_id: i32,
) -> Result<entity::favorite_planet::Model, DbErr> {
    entity::favorite_planet::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        planets_id: ActiveValue::Set(planets_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a `favorite_starships` row linking `user_id` to `starships_id`.
pub async fn create_favorite_starship(
    db: &DatabaseConnection,
    user_id: i32,
    starships_id: i32,
) -> Result<entity::favorite_starship::Model, DbErr> {
    entity::favorite_starship::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        starships_id: ActiveValue::Set(starships_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
