//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.
//!
//! Lookups across a join table are done in two steps: the ids are read from the join table
//! first and the related rows are then loaded with an `IN` filter.

pub mod address;
pub mod app_user;
pub mod category;
pub mod competence;
pub mod course;
pub mod role;
pub mod student_course;
pub mod teacher_competence;
pub mod teacher_course;

#[cfg(test)]
mod test;
