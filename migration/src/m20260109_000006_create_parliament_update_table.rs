use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParliamentUpdate::Table)
                    .if_not_exists()
                    .col(pk_auto(ParliamentUpdate::Id))
                    .col(string(ParliamentUpdate::Title))
                    .col(text(ParliamentUpdate::Description))
                    .col(integer(ParliamentUpdate::Upvotes).default(0))
                    .col(integer(ParliamentUpdate::Downvotes).default(0))
                    .col(timestamp(ParliamentUpdate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParliamentUpdate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ParliamentUpdate {
    Table,
    Id,
    Title,
    Description,
    Upvotes,
    Downvotes,
    CreatedAt,
}
