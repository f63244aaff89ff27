//! Course factory for creating test course entities.
//!
//! This module provides factory methods for creating course entities with sensible
//! defaults. Courses require an existing category.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db, category.id)
///     .code("RUST101")
///     .name("Rust for beginners")
///     .days(5)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    summary: Option<String>,
    description: Option<String>,
    days: Option<i32>,
    hours: Option<f64>,
    category_id: i32,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - code: `"C{id}"` where id is auto-incremented
    /// - name: `"Course {id}"`
    /// - summary, description, days, hours: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - ID of the category the course belongs to
    ///
    /// # Returns
    /// - `CourseFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("C{}", id),
            name: format!("Course {}", id),
            summary: None,
            description: None,
            days: None,
            hours: None,
            category_id,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn days(mut self, days: i32) -> Self {
        self.days = Some(days);
        self
    }

    pub fn hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            summary: ActiveValue::Set(self.summary),
            description: ActiveValue::Set(self.description),
            days: ActiveValue::Set(self.days),
            hours: ActiveValue::Set(self.hours),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values in the given category.
///
/// Shorthand for `CourseFactory::new(db, category_id).build().await`.
pub async fn create_course(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, category_id).build().await
}
