use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::app_user::AppUserRepository,
    error::AppError,
    model::app_user::{AppUser, CreateAppUserParam, UpdateAppUserParam},
};

pub struct AppUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_students(&self) -> Result<Vec<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db).get_students().await?)
    }

    pub async fn get_teachers(&self) -> Result<Vec<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db).get_teachers().await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_students_by_course(&self, course_id: i32) -> Result<Vec<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db)
            .get_students_by_course(course_id)
            .await?)
    }

    pub async fn get_teachers_by_course(&self, course_id: i32) -> Result<Vec<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db)
            .get_teachers_by_course(course_id)
            .await?)
    }

    pub async fn get_teachers_by_competence(
        &self,
        competence_id: i32,
    ) -> Result<Vec<AppUser>, AppError> {
        Ok(AppUserRepository::new(self.db)
            .get_teachers_by_competence(competence_id)
            .await?)
    }

    /// Gets the role names of a user
    ///
    /// # Returns
    /// - `Ok(Some(Vec<String>))` - Role names, possibly empty
    /// - `Ok(None)` - No user with the ID exists
    /// - `Err(AppError)` - Database error
    pub async fn get_role_names(&self, user_id: &str) -> Result<Option<Vec<String>>, AppError> {
        let repo = AppUserRepository::new(self.db);

        if repo.get_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        Ok(Some(repo.get_role_names(user_id).await?))
    }

    /// Creates a user and assigns the requested role
    ///
    /// The role is assigned only after the user row exists. Once the row is inserted the
    /// user is returned even if the role cannot be assigned; an unknown role name or a
    /// failed assignment is only logged.
    ///
    /// # Arguments
    /// - `param` - Create parameters including the optional role name
    ///
    /// # Returns
    /// - `Ok(AppUser)` - The created user
    /// - `Err(AppError::DbErr)` - Database error while inserting the user
    pub async fn create(&self, param: CreateAppUserParam) -> Result<AppUser, AppError> {
        let repo = AppUserRepository::new(self.db);

        let role_name = param.role_name.clone();
        let user = repo.create(param).await?;

        if let Some(role_name) = role_name.filter(|name| !name.is_empty()) {
            if let Err(err) = self.assign_role(&repo, &user.id, &role_name).await {
                tracing::error!(
                    "Failed to assign role {} to new user {}: {}",
                    role_name,
                    user.id,
                    err
                );
            }
        }

        Ok(user)
    }

    /// Updates a user and, when a role name is supplied, replaces its roles
    ///
    /// # Returns
    /// - `Ok(Some(AppUser))` - The updated user
    /// - `Ok(None)` - No user with `param.id` exists; nothing was changed
    /// - `Err(AppError::DbErr)` - Database error during the update or role replacement
    pub async fn update(&self, param: UpdateAppUserParam) -> Result<Option<AppUser>, AppError> {
        let repo = AppUserRepository::new(self.db);

        let role_name = param.role_name.clone();
        let Some(user) = repo.update(param).await? else {
            return Ok(None);
        };

        if let Some(role_name) = role_name.filter(|name| !name.is_empty()) {
            repo.clear_roles(&user.id).await?;
            self.assign_role(&repo, &user.id, &role_name).await?;
        }

        Ok(Some(user))
    }

    /// Deletes a user, returning `false` if it does not exist
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        Ok(AppUserRepository::new(self.db).delete(id).await?)
    }

    async fn assign_role(
        &self,
        repo: &AppUserRepository<'_>,
        user_id: &str,
        role_name: &str,
    ) -> Result<(), AppError> {
        if !repo.assign_role(user_id, role_name).await? {
            tracing::warn!(
                "Role {} does not exist, user {} was left without it",
                role_name,
                user_id
            );
        }

        Ok(())
    }
}
