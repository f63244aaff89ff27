use crate::server::{
    data::competence::CompetenceRepository,
    model::competence::{CreateCompetenceParam, UpdateCompetenceParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_teacher;
mod update;
