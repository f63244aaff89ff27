//! Enrollment factory linking students to courses.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating enrollments with customizable progress fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student_course::StudentCourseFactory;
///
/// let enrollment = StudentCourseFactory::new(&db, &student.id, course.id)
///     .started(true)
///     .grade("VG")
///     .build()
///     .await?;
/// ```
pub struct StudentCourseFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: String,
    course_id: i32,
    is_started: bool,
    is_completed: bool,
    grade: Option<String>,
}

impl<'a> StudentCourseFactory<'a> {
    /// Creates a new factory for a not yet started enrollment without a grade.
    pub fn new(db: &'a DatabaseConnection, student_id: &str, course_id: i32) -> Self {
        Self {
            db,
            student_id: student_id.to_string(),
            course_id,
            is_started: false,
            is_completed: false,
            grade: None,
        }
    }

    pub fn started(mut self, is_started: bool) -> Self {
        self.is_started = is_started;
        self
    }

    pub fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    /// Builds and inserts the enrollment into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student_course::Model)` - Created enrollment
    /// - `Err(DbErr)` - Database error during insert (including a duplicate pair)
    pub async fn build(self) -> Result<entity::student_course::Model, DbErr> {
        entity::student_course::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            course_id: ActiveValue::Set(self.course_id),
            is_started: ActiveValue::Set(self.is_started),
            is_completed: ActiveValue::Set(self.is_completed),
            grade: ActiveValue::Set(self.grade),
        }
        .insert(self.db)
        .await
    }
}

/// Enrolls a student in a course with default progress values.
pub async fn create_student_course(
    db: &DatabaseConnection,
    student_id: &str,
    course_id: i32,
) -> Result<entity::student_course::Model, DbErr> {
    StudentCourseFactory::new(db, student_id, course_id)
        .build()
        .await
}
