use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role with a random UUID as ID
    pub async fn create(&self, name: &str) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(self.db)
        .await
    }

    /// Finds a role by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }
}
