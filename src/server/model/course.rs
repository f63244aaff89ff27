//! Domain & parameter models for course operations
//!
//! Defines the course domain model, which carries the name of its category, the
//! create and update parameters, and conversions from entities and into DTOs.

use crate::model::course::{CourseDto, CreateCourseDto, UpdateCourseDto};

/// The course domain model
///
/// A course always belongs to exactly one category; `category_name` is resolved
/// when the course is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub days: Option<i32>,
    pub hours: Option<f64>,
    pub category_id: i32,
    pub category_name: String,
}

impl Course {
    /// Converts a course entity and its optionally loaded category to the domain model
    ///
    /// # Arguments
    /// - `entity` - The course entity model from the database
    /// - `category` - The category the course references, if it was loaded
    ///
    /// # Returns
    /// - `Course` - The domain model; `category_name` is empty when no category was loaded
    pub fn from_entity(
        entity: entity::course::Model,
        category: Option<entity::category::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            summary: entity.summary,
            description: entity.description,
            days: entity.days,
            hours: entity.hours,
            category_id: entity.category_id,
            category_name: category.map(|c| c.name).unwrap_or_default(),
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            code: self.code,
            name: self.name,
            summary: self.summary,
            description: self.description,
            days: self.days,
            hours: self.hours,
            category_name: self.category_name,
            category_id: self.category_id,
        }
    }
}

/// Parameters for creating a new course
#[derive(Debug, Clone)]
pub struct CreateCourseParam {
    pub code: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub days: Option<i32>,
    pub hours: Option<f64>,
    pub category_id: i32,
}

impl CreateCourseParam {
    pub fn from_dto(dto: CreateCourseDto) -> Self {
        Self {
            code: dto.code,
            name: dto.name,
            summary: dto.summary,
            description: dto.description,
            days: dto.days,
            hours: dto.hours,
            category_id: dto.category_id,
        }
    }
}

/// Parameters for updating an existing course, identified by `id`
#[derive(Debug, Clone)]
pub struct UpdateCourseParam {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub days: Option<i32>,
    pub hours: Option<f64>,
    pub category_id: i32,
}

impl UpdateCourseParam {
    pub fn from_dto(dto: UpdateCourseDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            summary: dto.summary,
            description: dto.description,
            days: dto.days,
            hours: dto.hours,
            category_id: dto.category_id,
        }
    }
}
