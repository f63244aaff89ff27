//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying rules such as role assignment on user create and update
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Converting database errors into `AppError`

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
