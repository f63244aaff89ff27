use dioxus_logger::tracing;

use crate::{
    model::app_user::{STUDENT_ROLE, TEACHER_ROLE},
    server::{config::Config, data::role::RoleRepository, error::AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the roles users can be assigned to exist.
///
/// Creates the "Student" and "Teacher" roles when they are missing so that role
/// assignment during user creation always has a target.
///
/// # Arguments
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(())` - Both roles exist
/// - `Err(AppError)` - Database error while reading or inserting roles
pub async fn seed_roles(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let repo = RoleRepository::new(db);

    for name in [STUDENT_ROLE, TEACHER_ROLE] {
        if repo.find_by_name(name).await?.is_none() {
            repo.create(name).await?;
            tracing::info!("Created missing role {}", name);
        }
    }

    Ok(())
}
