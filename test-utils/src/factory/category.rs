//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a category with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    create_category_with_name(db, format!("Category {}", next_id())).await
}

/// Creates a category with a specific name.
pub async fn create_category_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    entity::category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
