//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user that has favorited one item of every kind.
///
/// This is a convenience method that creates:
/// 1. User
/// 2. People, planet and starship items
/// 3. One favorite relation per kind linking the user to each item
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, people, planet, starship))` - Tuple of created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_all_favorites(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::people::Model,
        entity::planet::Model,
        entity::starship::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let people = crate::factory::item::create_people(db).await?;
    let planet = crate::factory::item::create_planet(db).await?;
    let starship = crate::factory::item::create_starship(db).await?;

    crate::factory::favorite::create_favorite_people(db, user.id, people.id).await?;
    crate::factory::favorite::create_favorite_planet(db, user.id, planet.id).await?;
    crate::factory::favorite::create_favorite_starship(db, user.id, starship.id).await?;

    Ok((user, people, planet, starship))
}
