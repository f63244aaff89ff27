//! HTTP request handlers for the REST API.
//!
//! Each module handles one resource under `/api/{Resource}`. Handlers extract path
//! parameters and JSON bodies, convert DTOs into params, call the matching service and
//! convert the returned domain models back into DTOs. Missing targets become 404
//! responses; failed writes become 500 responses carrying a `Fail: ...` message.

pub mod address;
pub mod app_user;
pub mod category;
pub mod competence;
pub mod course;
pub mod student_course;
pub mod teacher_competence;
pub mod teacher_course;

#[cfg(test)]
mod test;
