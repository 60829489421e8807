use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starships::Table)
                    .if_not_exists()
                    .col(pk_auto(Starships::Id))
                    .col(string_len(Starships::Name, 120))
                    .col(string_len(Starships::CommentText, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Starships {
    Table,
    Id,
    Name,
    CommentText,
}
