use sea_orm::DatabaseConnection;

use crate::server::{
    data::teacher_course::TeacherCourseRepository,
    error::AppError,
    model::teacher_course::{TeacherCourse, TeacherCourseKey},
};

pub struct TeacherCourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherCourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TeacherCourse>, AppError> {
        Ok(TeacherCourseRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<TeacherCourse>, AppError> {
        Ok(TeacherCourseRepository::new(self.db)
            .get_by_teacher(teacher_id)
            .await?)
    }

    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<TeacherCourse>, AppError> {
        Ok(TeacherCourseRepository::new(self.db)
            .get_by_course(course_id)
            .await?)
    }

    pub async fn get_by_key(
        &self,
        teacher_id: &str,
        course_id: i32,
    ) -> Result<Option<TeacherCourse>, AppError> {
        Ok(TeacherCourseRepository::new(self.db)
            .get_by_key(teacher_id, course_id)
            .await?)
    }

    pub async fn create(&self, key: TeacherCourseKey) -> Result<TeacherCourseKey, AppError> {
        Ok(TeacherCourseRepository::new(self.db).create(key).await?)
    }

    pub async fn delete(&self, teacher_id: &str, course_id: i32) -> Result<bool, AppError> {
        Ok(TeacherCourseRepository::new(self.db)
            .delete(teacher_id, course_id)
            .await?)
    }
}
