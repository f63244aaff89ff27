use crate::server::{
    data::teacher_course::TeacherCourseRepository, model::teacher_course::TeacherCourseKey,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_course;
