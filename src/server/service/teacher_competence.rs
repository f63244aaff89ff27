use sea_orm::DatabaseConnection;

use crate::server::{
    data::teacher_competence::TeacherCompetenceRepository,
    error::AppError,
    model::teacher_competence::{TeacherCompetence, TeacherCompetenceKey},
};

pub struct TeacherCompetenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherCompetenceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TeacherCompetence>, AppError> {
        Ok(TeacherCompetenceRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_teacher(
        &self,
        teacher_id: &str,
    ) -> Result<Vec<TeacherCompetence>, AppError> {
        Ok(TeacherCompetenceRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?)
    }

    pub async fn get_by_competence(
        &self,
        competence_id: i32,
    ) -> Result<Vec<TeacherCompetence>, AppError> {
        Ok(TeacherCompetenceRepository::new(self.db)
            .get_by_competence(competence_id)
            .await?)
    }

    pub async fn get_by_key(
        &self,
        teacher_id: &str,
        competence_id: i32,
    ) -> Result<Option<TeacherCompetence>, AppError> {
        Ok(TeacherCompetenceRepository::new(self.db)
            .get_by_key(teacher_id, competence_id)
            .await?)
    }

    pub async fn create(
        &self,
        key: TeacherCompetenceKey,
    ) -> Result<TeacherCompetenceKey, AppError> {
        Ok(TeacherCompetenceRepository::new(self.db).create(key).await?)
    }

    pub async fn delete(&self, teacher_id: &str, competence_id: i32) -> Result<bool, AppError> {
        Ok(TeacherCompetenceRepository::new(self.db)
            .delete(teacher_id, competence_id)
            .await?)
    }
}
