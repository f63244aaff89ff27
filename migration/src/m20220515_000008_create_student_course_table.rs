use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20220515_000002_create_app_user_table::AppUser, m20220515_000006_create_course_table::Course,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCourse::Table)
                    .if_not_exists()
                    .col(string(StudentCourse::StudentId))
                    .col(integer(StudentCourse::CourseId))
                    .col(boolean(StudentCourse::IsStarted).default(false))
                    .col(boolean(StudentCourse::IsCompleted).default(false))
                    .col(string_null(StudentCourse::Grade))
                    .primary_key(
                        Index::create()
                            .name("pk_student_course")
                            .col(StudentCourse::StudentId)
                            .col(StudentCourse::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_student_id")
                            .from(StudentCourse::Table, StudentCourse::StudentId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_student_course_course_id")
                            .from(StudentCourse::Table, StudentCourse::CourseId)
                            .to(Course::Table, Course::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentCourse {
    Table,
    StudentId,
    CourseId,
    IsStarted,
    IsCompleted,
    Grade,
}
