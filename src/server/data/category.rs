use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::category::{Category, CreateCategoryParam, UpdateCategoryParam};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by name
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let categories = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let category = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(category.map(Category::from_entity))
    }

    /// Creates a new category
    pub async fn create(&self, param: CreateCategoryParam) -> Result<Category, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(category))
    }

    /// Renames a category, returning `None` if it does not exist
    pub async fn update(&self, param: UpdateCategoryParam) -> Result<Option<Category>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(param.name);

        let category = active_model.update(self.db).await?;

        Ok(Some(Category::from_entity(category)))
    }

    /// Deletes a category and, through cascading deletes, its courses
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
