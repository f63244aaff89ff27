use crate::server::{
    data::student_course::StudentCourseRepository,
    model::student_course::{CreateStudentCourseParam, UpdateStudentCourseParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_student;
mod update;
