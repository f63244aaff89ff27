use crate::{
    model::app_user::{STUDENT_ROLE, TEACHER_ROLE},
    server::{
        data::app_user::AppUserRepository,
        model::app_user::{CreateAppUserParam, UpdateAppUserParam},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_course;
mod get_by_role;
mod get_teachers_by_competence;
mod roles;
mod update;

fn create_param(address_id: i32, email: &str) -> CreateAppUserParam {
    CreateAppUserParam {
        email: email.to_string(),
        phone_number: Some("0701234567".to_string()),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        address_id,
        role_name: None,
    }
}
