//! Competence factory for creating test competence entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a competence with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::competence::Model)` - Created competence entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_competence(
    db: &DatabaseConnection,
) -> Result<entity::competence::Model, DbErr> {
    create_competence_with_name(db, format!("Competence {}", next_id())).await
}

/// Creates a competence with a specific name.
pub async fn create_competence_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::competence::Model, DbErr> {
    entity::competence::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
