use sea_orm_migration::{prelude::*, schema::*};

use super::m20251015_000001_create_user_table::User;
use super::m20251015_000004_create_starships_table::Starships;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteStarships::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteStarships::Id))
                    .col(integer(FavoriteStarships::UserId))
                    .col(integer(FavoriteStarships::StarshipsId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_starships_user_id")
                            .from(FavoriteStarships::Table, FavoriteStarships::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_starships_starships_id")
                            .from(FavoriteStarships::Table, FavoriteStarships::StarshipsId)
                            .to(Starships::Table, Starships::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("unique_fav_starship")
                            .col(FavoriteStarships::UserId)
                            .col(FavoriteStarships::StarshipsId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteStarships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteStarships {
    Table,
    Id,
    UserId,
    StarshipsId,
}
