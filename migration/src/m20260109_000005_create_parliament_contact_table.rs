use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParliamentContact::Table)
                    .if_not_exists()
                    .col(pk_auto(ParliamentContact::Id))
                    .col(string(ParliamentContact::Name))
                    .col(string(ParliamentContact::Position))
                    .col(string(ParliamentContact::Email))
                    .col(integer(ParliamentContact::Upvotes).default(0))
                    .col(integer(ParliamentContact::Downvotes).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParliamentContact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ParliamentContact {
    Table,
    Id,
    Name,
    Position,
    Email,
    Upvotes,
    Downvotes,
}
