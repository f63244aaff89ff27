use sea_orm::DatabaseConnection;

use crate::server::{
    data::student_course::StudentCourseRepository,
    error::AppError,
    model::student_course::{
        CreateStudentCourseParam, StudentCourse, StudentCourseKey, UpdateStudentCourseParam,
    },
};

pub struct StudentCourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentCourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<StudentCourse>, AppError> {
        Ok(StudentCourseRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<StudentCourse>, AppError> {
        Ok(StudentCourseRepository::new(self.db)
            .get_by_student(student_id)
            .await?)
    }

    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<StudentCourse>, AppError> {
        Ok(StudentCourseRepository::new(self.db)
            .get_by_course(course_id)
            .await?)
    }

    pub async fn get_by_key(
        &self,
        student_id: &str,
        course_id: i32,
    ) -> Result<Option<StudentCourse>, AppError> {
        Ok(StudentCourseRepository::new(self.db)
            .get_by_key(student_id, course_id)
            .await?)
    }

    pub async fn create(
        &self,
        param: CreateStudentCourseParam,
    ) -> Result<StudentCourseKey, AppError> {
        Ok(StudentCourseRepository::new(self.db).create(param).await?)
    }

    pub async fn update(
        &self,
        param: UpdateStudentCourseParam,
    ) -> Result<Option<StudentCourseKey>, AppError> {
        Ok(StudentCourseRepository::new(self.db).update(param).await?)
    }

    pub async fn delete(&self, student_id: &str, course_id: i32) -> Result<bool, AppError> {
        Ok(StudentCourseRepository::new(self.db)
            .delete(student_id, course_id)
            .await?)
    }
}
