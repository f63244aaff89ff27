use sea_orm::DatabaseConnection;

use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::course::{Course, CreateCourseParam, UpdateCourseParam},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_by_category(category_id)
            .await?)
    }

    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?)
    }

    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, AppError> {
        Ok(CourseRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, param: UpdateCourseParam) -> Result<Option<Course>, AppError> {
        Ok(CourseRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CourseRepository::new(self.db).delete(id).await?)
    }
}
