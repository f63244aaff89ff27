use sea_orm::DatabaseConnection;

use crate::server::{
    data::competence::CompetenceRepository,
    error::AppError,
    model::competence::{Competence, CreateCompetenceParam, UpdateCompetenceParam},
};

pub struct CompetenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompetenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Competence>, AppError> {
        Ok(CompetenceRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Competence>, AppError> {
        Ok(CompetenceRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<Competence>, AppError> {
        Ok(CompetenceRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?)
    }

    pub async fn create(&self, param: CreateCompetenceParam) -> Result<Competence, AppError> {
        Ok(CompetenceRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        param: UpdateCompetenceParam,
    ) -> Result<Option<Competence>, AppError> {
        Ok(CompetenceRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CompetenceRepository::new(self.db).delete(id).await?)
    }
}
