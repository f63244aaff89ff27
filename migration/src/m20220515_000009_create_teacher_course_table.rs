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
                    .table(TeacherCourse::Table)
                    .if_not_exists()
                    .col(string(TeacherCourse::TeacherId))
                    .col(integer(TeacherCourse::CourseId))
                    .primary_key(
                        Index::create()
                            .name("pk_teacher_course")
                            .col(TeacherCourse::TeacherId)
                            .col(TeacherCourse::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_course_teacher_id")
                            .from(TeacherCourse::Table, TeacherCourse::TeacherId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_course_course_id")
                            .from(TeacherCourse::Table, TeacherCourse::CourseId)
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
            .drop_table(Table::drop().table(TeacherCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeacherCourse {
    Table,
    TeacherId,
    CourseId,
}
