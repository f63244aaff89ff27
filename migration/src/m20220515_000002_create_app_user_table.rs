use sea_orm_migration::{prelude::*, schema::*};

use super::m20220515_000001_create_address_table::Address;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(string(AppUser::Id).primary_key())
                    .col(string_uniq(AppUser::UserName))
                    .col(string(AppUser::Email))
                    .col(string_null(AppUser::PhoneNumber))
                    .col(string(AppUser::FirstName))
                    .col(string(AppUser::LastName))
                    .col(integer(AppUser::AddressId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_user_address_id")
                            .from(AppUser::Table, AppUser::AddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    UserName,
    Email,
    PhoneNumber,
    FirstName,
    LastName,
    AddressId,
}
