use sea_orm_migration::{prelude::*, schema::*};

use super::m20251015_000001_create_user_table::User;
use super::m20251015_000002_create_peoples_table::Peoples;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePeoples::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoritePeoples::Id))
                    .col(integer(FavoritePeoples::UserId))
                    .col(integer(FavoritePeoples::PeoplesId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_peoples_user_id")
                            .from(FavoritePeoples::Table, FavoritePeoples::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_peoples_peoples_id")
                            .from(FavoritePeoples::Table, FavoritePeoples::PeoplesId)
                            .to(Peoples::Table, Peoples::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("unique_fav_people")
                            .col(FavoritePeoples::UserId)
                            .col(FavoritePeoples::PeoplesId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePeoples::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePeoples {
    Table,
    Id,
    UserId,
    PeoplesId,
}
