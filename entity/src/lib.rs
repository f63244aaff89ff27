//! SeaORM entities for the Westcoast Education schema.
//!
//! Each module mirrors one table created by the `migration` crate. Join tables use
//! composite primary keys so duplicate enrollments and assignments are rejected by the
//! database itself.

pub mod prelude;

pub mod address;
pub mod app_user;
pub mod category;
pub mod competence;
pub mod course;
pub mod role;
pub mod student_course;
pub mod teacher_competence;
pub mod teacher_course;
pub mod user_role;
