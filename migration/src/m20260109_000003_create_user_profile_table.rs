use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260109_000002_create_mess_table::Mess;

static FK_USER_PROFILE_MESS_ID: &str = "fk_user_profile_mess_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(pk_auto(UserProfile::Id))
                    .col(integer_uniq(UserProfile::UserId))
                    .col(string(UserProfile::Name))
                    .col(integer_null(UserProfile::MessId))
                    .col(timestamp(UserProfile::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_PROFILE_MESS_ID)
                    .from_tbl(UserProfile::Table)
                    .from_col(UserProfile::MessId)
                    .to_tbl(Mess::Table)
                    .to_col(Mess::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_PROFILE_MESS_ID)
                    .table(UserProfile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    Id,
    UserId,
    Name,
    MessId,
    CreatedAt,
}
