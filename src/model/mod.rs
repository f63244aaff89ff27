//! Data transfer objects shared by the API and the front-end apps.
//!
//! These are the JSON view models exchanged over HTTP. Field names are serialized in
//! camelCase to keep the wire format stable for any client of `/api`.

pub mod address;
pub mod app_user;
pub mod category;
pub mod competence;
pub mod course;
pub mod student_course;
pub mod teacher_competence;
pub mod teacher_course;
