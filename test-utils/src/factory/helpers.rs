//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with its address.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((address, user))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_address(
    db: &DatabaseConnection,
) -> Result<(entity::address::Model, entity::app_user::Model), DbErr> {
    let address = crate::factory::address::create_address(db).await?;
    let user = crate::factory::app_user::create_app_user(db, address.id).await?;

    Ok((address, user))
}

/// Creates a user holding the named role.
///
/// Creates the address, the user, the role (if no role of that name exists yet)
/// and the membership linking them.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - Name of the role to assign, e.g. `"Student"`
///
/// # Returns
/// - `Ok(entity::app_user::Model)` - Created user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_in_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<entity::app_user::Model, DbErr> {
    let (_, user) = create_user_with_address(db).await?;
    let role = crate::factory::role::find_or_create_role(db, role_name).await?;
    crate::factory::role::assign_role(db, &user.id, &role.id).await?;

    Ok(user)
}

/// Creates a course together with its category.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, course))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_course_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::course::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let course = crate::factory::course::create_course(db, category.id).await?;

    Ok((category, course))
}

/// Creates a complete enrollment hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Address and user (the student)
/// 2. Category and course
/// 3. The enrollment linking the student to the course
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((student, course, enrollment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_enrollment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::app_user::Model,
        entity::course::Model,
        entity::student_course::Model,
    ),
    DbErr,
> {
    let (_, student) = create_user_with_address(db).await?;
    let (_, course) = create_course_with_category(db).await?;
    let enrollment =
        crate::factory::student_course::create_student_course(db, &student.id, course.id).await?;

    Ok((student, course, enrollment))
}
