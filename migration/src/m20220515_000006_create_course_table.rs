use sea_orm_migration::{prelude::*, schema::*};

use super::m20220515_000005_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(pk_auto(Course::Id))
                    .col(string(Course::Code))
                    .col(string(Course::Name))
                    .col(text_null(Course::Summary))
                    .col(text_null(Course::Description))
                    .col(integer_null(Course::Days))
                    .col(double_null(Course::Hours))
                    .col(integer(Course::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_category_id")
                            .from(Course::Table, Course::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    Table,
    Id,
    Code,
    Name,
    Summary,
    Description,
    Days,
    Hours,
    CategoryId,
}
