use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Peoples::Table)
                    .if_not_exists()
                    .col(pk_auto(Peoples::Id))
                    .col(string_len(Peoples::Name, 120))
                    .col(string_len(Peoples::CommentText, 120))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Peoples::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Peoples {
    Table,
    Id,
    Name,
    CommentText,
}
