use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParam, UpdateCategoryParam},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn create(&self, param: CreateCategoryParam) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateCategoryParam) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CategoryRepository::new(self.db).delete(id).await?)
    }
}
