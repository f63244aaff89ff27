use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Competence::Table)
                    .if_not_exists()
                    .col(pk_auto(Competence::Id))
                    .col(string(Competence::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Competence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Competence {
    Table,
    Id,
    Name,
}
