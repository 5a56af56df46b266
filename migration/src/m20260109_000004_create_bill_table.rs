use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260109_000002_create_mess_table::Mess,
    m20260109_000003_create_user_profile_table::UserProfile,
};

static FK_BILL_USER_PROFILE_ID: &str = "fk_bill_user_profile_id";
static FK_BILL_MESS_ID: &str = "fk_bill_mess_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bill::Table)
                    .if_not_exists()
                    .col(pk_auto(Bill::Id))
                    .col(integer(Bill::UserProfileId))
                    .col(integer(Bill::MessId))
                    .col(integer(Bill::MonthlyBill))
                    .col(integer(Bill::ExtraCharges))
                    .col(timestamp(Bill::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BILL_USER_PROFILE_ID)
                    .from_tbl(Bill::Table)
                    .from_col(Bill::UserProfileId)
                    .to_tbl(UserProfile::Table)
                    .to_col(UserProfile::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BILL_MESS_ID)
                    .from_tbl(Bill::Table)
                    .from_col(Bill::MessId)
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
                    .name(FK_BILL_USER_PROFILE_ID)
                    .table(Bill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BILL_MESS_ID)
                    .table(Bill::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Bill::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Bill {
    Table,
    Id,
    UserProfileId,
    MessId,
    MonthlyBill,
    ExtraCharges,
    CreatedAt,
}
