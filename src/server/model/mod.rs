//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod address;
pub mod app_user;
pub mod category;
pub mod competence;
pub mod course;
pub mod student_course;
pub mod teacher_competence;
pub mod teacher_course;
