use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20220515_000002_create_app_user_table::AppUser,
    m20220515_000007_create_competence_table::Competence,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeacherCompetence::Table)
                    .if_not_exists()
                    .col(string(TeacherCompetence::TeacherId))
                    .col(integer(TeacherCompetence::CompetenceId))
                    .primary_key(
                        Index::create()
                            .name("pk_teacher_competence")
                            .col(TeacherCompetence::TeacherId)
                            .col(TeacherCompetence::CompetenceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_competence_teacher_id")
                            .from(TeacherCompetence::Table, TeacherCompetence::TeacherId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_competence_competence_id")
                            .from(TeacherCompetence::Table, TeacherCompetence::CompetenceId)
                            .to(Competence::Table, Competence::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeacherCompetence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeacherCompetence {
    Table,
    TeacherId,
    CompetenceId,
}
