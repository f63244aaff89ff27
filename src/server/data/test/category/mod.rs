use crate::server::{
    data::category::CategoryRepository,
    model::category::{CreateCategoryParam, UpdateCategoryParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod update;
