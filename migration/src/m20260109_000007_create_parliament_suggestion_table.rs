use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParliamentSuggestion::Table)
                    .if_not_exists()
                    .col(pk_auto(ParliamentSuggestion::Id))
                    .col(string(ParliamentSuggestion::Title))
                    .col(text(ParliamentSuggestion::Description))
                    .col(integer(ParliamentSuggestion::Upvotes).default(0))
                    .col(integer(ParliamentSuggestion::Downvotes).default(0))
                    .col(timestamp(ParliamentSuggestion::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParliamentSuggestion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ParliamentSuggestion {
    Table,
    Id,
    Title,
    Description,
    Upvotes,
    Downvotes,
    CreatedAt,
}
