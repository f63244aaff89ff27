//! Teacher qualification factory linking teachers to competences.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that a teacher holds a competence.
///
/// # Arguments
/// - `db` - Database connection
/// - `teacher_id` - ID of the teaching user
/// - `competence_id` - ID of the competence
///
/// # Returns
/// - `Ok(entity::teacher_competence::Model)` - Created qualification
/// - `Err(DbErr)` - Database error during insert (including a duplicate pair)
pub async fn create_teacher_competence(
    db: &DatabaseConnection,
    teacher_id: &str,
    competence_id: i32,
) -> Result<entity::teacher_competence::Model, DbErr> {
    entity::teacher_competence::ActiveModel {
        teacher_id: ActiveValue::Set(teacher_id.to_string()),
        competence_id: ActiveValue::Set(competence_id),
    }
    .insert(db)
    .await
}
