//! User data repository for database operations
//!
//! Provides the `AppUserRepository` for reading and writing users, querying them by
//! role, by course and by competence, and managing their role memberships. Every user
//! is returned together with the one-line name of its address.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::app_user::{STUDENT_ROLE, TEACHER_ROLE},
    server::model::app_user::{AppUser, CreateAppUserParam, UpdateAppUserParam},
};

/// Repository providing database operations for user management.
pub struct AppUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppUserRepository<'a> {
    /// Creates a new AppUserRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AppUserRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all users ordered by last name, then first name
    pub async fn get_all(&self) -> Result<Vec<AppUser>, DbErr> {
        let users = entity::prelude::AppUser::find()
            .find_also_related(entity::prelude::Address)
            .order_by_asc(entity::app_user::Column::LastName)
            .order_by_asc(entity::app_user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|(user, address)| AppUser::from_entity(user, address))
            .collect())
    }

    /// Gets all users holding the "Student" role
    pub async fn get_students(&self) -> Result<Vec<AppUser>, DbErr> {
        self.get_by_role_name(STUDENT_ROLE).await
    }

    /// Gets all users holding the "Teacher" role
    pub async fn get_teachers(&self) -> Result<Vec<AppUser>, DbErr> {
        self.get_by_role_name(TEACHER_ROLE).await
    }

    /// Gets all users holding the role with the provided name
    ///
    /// # Arguments
    /// - `role_name` - Name of the role
    ///
    /// # Returns
    /// - `Ok(Vec<AppUser>)` - Users holding the role; empty when the role does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_role_name(&self, role_name: &str) -> Result<Vec<AppUser>, DbErr> {
        let role_ids: Vec<String> = entity::prelude::Role::find()
            .select_only()
            .column(entity::role::Column::Id)
            .filter(entity::role::Column::Name.eq(role_name))
            .into_tuple()
            .all(self.db)
            .await?;

        let user_ids: Vec<String> = entity::prelude::UserRole::find()
            .select_only()
            .column(entity::user_role::Column::UserId)
            .filter(entity::user_role::Column::RoleId.is_in(role_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        self.get_by_ids(user_ids).await
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(Some(AppUser))` - The user if found
    /// - `Ok(None)` - No user with the ID exists
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: &str) -> Result<Option<AppUser>, DbErr> {
        let user = entity::prelude::AppUser::find_by_id(id.to_string())
            .find_also_related(entity::prelude::Address)
            .one(self.db)
            .await?;

        Ok(user.map(|(user, address)| AppUser::from_entity(user, address)))
    }

    /// Gets all students enrolled in a course
    pub async fn get_students_by_course(&self, course_id: i32) -> Result<Vec<AppUser>, DbErr> {
        let student_ids: Vec<String> = entity::prelude::StudentCourse::find()
            .select_only()
            .column(entity::student_course::Column::StudentId)
            .filter(entity::student_course::Column::CourseId.eq(course_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.get_by_ids(student_ids).await
    }

    /// Gets all teachers assigned to a course
    pub async fn get_teachers_by_course(&self, course_id: i32) -> Result<Vec<AppUser>, DbErr> {
        let teacher_ids: Vec<String> = entity::prelude::TeacherCourse::find()
            .select_only()
            .column(entity::teacher_course::Column::TeacherId)
            .filter(entity::teacher_course::Column::CourseId.eq(course_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.get_by_ids(teacher_ids).await
    }

    /// Gets all teachers holding a competence
    pub async fn get_teachers_by_competence(
        &self,
        competence_id: i32,
    ) -> Result<Vec<AppUser>, DbErr> {
        let teacher_ids: Vec<String> = entity::prelude::TeacherCompetence::find()
            .select_only()
            .column(entity::teacher_competence::Column::TeacherId)
            .filter(entity::teacher_competence::Column::CompetenceId.eq(competence_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.get_by_ids(teacher_ids).await
    }

    /// Creates a new user with a random UUID as ID
    ///
    /// The user name is set to the email.
    ///
    /// # Arguments
    /// - `param` - Create parameters; `role_name` is ignored here
    ///
    /// # Returns
    /// - `Ok(AppUser)` - The created user
    /// - `Err(DbErr)` - Database error during insert, e.g. duplicate email or unknown address
    pub async fn create(&self, param: CreateAppUserParam) -> Result<AppUser, DbErr> {
        let user = entity::app_user::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_name: ActiveValue::Set(param.email.clone()),
            email: ActiveValue::Set(param.email),
            phone_number: ActiveValue::Set(param.phone_number),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            address_id: ActiveValue::Set(param.address_id),
        }
        .insert(self.db)
        .await?;

        let address = entity::prelude::Address::find_by_id(user.address_id)
            .one(self.db)
            .await?;

        Ok(AppUser::from_entity(user, address))
    }

    /// Updates the personal fields and address of a user
    ///
    /// The user name is set to the new email. Role memberships are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(AppUser))` - The updated user
    /// - `Ok(None)` - No user with `param.id` exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateAppUserParam) -> Result<Option<AppUser>, DbErr> {
        let Some(user) = entity::prelude::AppUser::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::app_user::ActiveModel = user.into();
        active_model.user_name = ActiveValue::Set(param.email.clone());
        active_model.email = ActiveValue::Set(param.email);
        active_model.phone_number = ActiveValue::Set(param.phone_number);
        active_model.first_name = ActiveValue::Set(param.first_name);
        active_model.last_name = ActiveValue::Set(param.last_name);
        active_model.address_id = ActiveValue::Set(param.address_id);

        let user = active_model.update(self.db).await?;

        let address = entity::prelude::Address::find_by_id(user.address_id)
            .one(self.db)
            .await?;

        Ok(Some(AppUser::from_entity(user, address)))
    }

    /// Deletes a user along with its role memberships, enrollments and assignments
    ///
    /// # Returns
    /// - `Ok(true)` - The user was deleted
    /// - `Ok(false)` - No user with the ID exists
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AppUser::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the names of all roles held by a user, ordered by name
    pub async fn get_role_names(&self, user_id: &str) -> Result<Vec<String>, DbErr> {
        let role_ids: Vec<String> = entity::prelude::UserRole::find()
            .select_only()
            .column(entity::user_role::Column::RoleId)
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await?;

        entity::prelude::Role::find()
            .select_only()
            .column(entity::role::Column::Name)
            .filter(entity::role::Column::Id.is_in(role_ids))
            .order_by_asc(entity::role::Column::Name)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Adds a user to the role with the provided name
    ///
    /// Adding a role the user already holds is a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - The user holds the role
    /// - `Ok(false)` - No role with the name exists
    /// - `Err(DbErr)` - Database error, e.g. the user does not exist
    pub async fn assign_role(&self, user_id: &str, role_name: &str) -> Result<bool, DbErr> {
        let Some(role) = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(role_name))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let existing = entity::prelude::UserRole::find_by_id((user_id.to_string(), role.id.clone()))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                role_id: ActiveValue::Set(role.id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(true)
    }

    /// Removes a user from every role it holds
    pub async fn clear_roles(&self, user_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn get_by_ids(&self, ids: Vec<String>) -> Result<Vec<AppUser>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Address)
            .order_by_asc(entity::app_user::Column::LastName)
            .order_by_asc(entity::app_user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(users
            .into_iter()
            .map(|(user, address)| AppUser::from_entity(user, address))
            .collect())
    }
}
