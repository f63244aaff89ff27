use crate::server::{
    data::course::CourseRepository,
    model::course::{CreateCourseParam, UpdateCourseParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_category;
mod get_by_student;
mod get_by_teacher;
mod update;
