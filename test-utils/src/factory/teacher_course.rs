//! Teaching assignment factory linking teachers to courses.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns a teacher to a course.
///
/// # Arguments
/// - `db` - Database connection
/// - `teacher_id` - ID of the teaching user
/// - `course_id` - ID of the course
///
/// # Returns
/// - `Ok(entity::teacher_course::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert (including a duplicate pair)
pub async fn create_teacher_course(
    db: &DatabaseConnection,
    teacher_id: &str,
    course_id: i32,
) -> Result<entity::teacher_course::Model, DbErr> {
    entity::teacher_course::ActiveModel {
        teacher_id: ActiveValue::Set(teacher_id.to_string()),
        course_id: ActiveValue::Set(course_id),
    }
    .insert(db)
    .await
}
