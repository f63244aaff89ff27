//! Role factory for creating roles and role memberships.

use crate::factory::helpers::next_id;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Creates a role with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Unique role name, e.g. `"Student"`
///
/// # Returns
/// - `Ok(entity::role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert (including a duplicate name)
pub async fn create_role(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        id: ActiveValue::Set(format!("role-{}", next_id())),
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}

/// Returns the role with the given name, creating it when missing.
pub async fn find_or_create_role(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::role::Model, DbErr> {
    let existing = entity::prelude::Role::find()
        .filter(entity::role::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(role) => Ok(role),
        None => create_role(db, name).await,
    }
}

/// Adds a user to a role.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user
/// - `role_id` - ID of the role
///
/// # Returns
/// - `Ok(entity::user_role::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: &str,
    role_id: &str,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        role_id: ActiveValue::Set(role_id.to_string()),
    }
    .insert(db)
    .await
}
