use crate::{
    model::app_user::{STUDENT_ROLE, TEACHER_ROLE},
    server::{
        error::AppError,
        model::app_user::{CreateAppUserParam, UpdateAppUserParam},
        service::app_user::AppUserService,
        startup::seed_roles,
    },
};
use entity::prelude::{Address, AppUser, Role};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
