use crate::server::{
    data::teacher_competence::TeacherCompetenceRepository,
    model::teacher_competence::TeacherCompetenceKey,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
