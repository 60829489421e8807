pub use sea_orm_migration::prelude::*;

mod m20251015_000001_create_user_table;
mod m20251015_000002_create_peoples_table;
mod m20251015_000003_create_planets_table;
mod m20251015_000004_create_starships_table;
mod m20251015_000005_create_favorite_peoples_table;
mod m20251015_000006_create_favorite_planets_table;
mod m20251015_000007_create_favorite_starships_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251015_000001_create_user_table::Migration),
            Box::new(m20251015_000002_create_peoples_table::Migration),
            Box::new(m20251015_000003_create_planets_table::Migration),
            Box::new(m20251015_000004_create_starships_table::Migration),
            Box::new(m20251015_000005_create_favorite_peoples_table::Migration),
            Box::new(m20251015_000006_create_favorite_planets_table::Migration),
            Box::new(m20251015_000007_create_favorite_starships_table::Migration),
        ]
    }
}
