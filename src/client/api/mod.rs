#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod address;

#[cfg(feature = "web")]
pub mod app_user;

#[cfg(feature = "web")]
pub mod category;

#[cfg(feature = "web")]
pub mod competence;

#[cfg(feature = "web")]
pub mod course;

#[cfg(feature = "web")]
pub mod student_course;

#[cfg(feature = "web")]
pub mod teacher_competence;

#[cfg(feature = "web")]
pub mod teacher_course;
