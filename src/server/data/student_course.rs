//! Enrollment data repository for database operations
//!
//! Provides the `StudentCourseRepository` for enrolling students in courses, recording
//! their progress and listing enrollments by student or by course. Listed enrollments
//! carry the student's full name and the course name, resolved in batch per query.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::student_course::{
    CreateStudentCourseParam, StudentCourse, StudentCourseKey, UpdateStudentCourseParam,
};

pub struct StudentCourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentCourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all enrollments
    pub async fn get_all(&self) -> Result<Vec<StudentCourse>, DbErr> {
        let enrollments = entity::prelude::StudentCourse::find()
            .order_by_asc(entity::student_course::Column::CourseId)
            .order_by_asc(entity::student_course::Column::StudentId)
            .all(self.db)
            .await?;

        self.with_names(enrollments).await
    }

    /// Gets all enrollments of a student
    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<StudentCourse>, DbErr> {
        let enrollments = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentId.eq(student_id))
            .order_by_asc(entity::student_course::Column::CourseId)
            .all(self.db)
            .await?;

        self.with_names(enrollments).await
    }

    /// Gets all enrollments in a course
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<StudentCourse>, DbErr> {
        let enrollments = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::CourseId.eq(course_id))
            .order_by_asc(entity::student_course::Column::StudentId)
            .all(self.db)
            .await?;

        self.with_names(enrollments).await
    }

    /// Gets a single enrollment by its composite key
    pub async fn get_by_key(
        &self,
        student_id: &str,
        course_id: i32,
    ) -> Result<Option<StudentCourse>, DbErr> {
        let Some(enrollment) =
            entity::prelude::StudentCourse::find_by_id((student_id.to_string(), course_id))
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        Ok(self.with_names(vec![enrollment]).await?.into_iter().next())
    }

    /// Enrolls a student in a course
    ///
    /// # Returns
    /// - `Ok(StudentCourseKey)` - Key of the new enrollment
    /// - `Err(DbErr)` - Database error, e.g. the pair already exists or either side is unknown
    pub async fn create(&self, param: CreateStudentCourseParam) -> Result<StudentCourseKey, DbErr> {
        let enrollment = entity::student_course::ActiveModel {
            student_id: ActiveValue::Set(param.student_id),
            course_id: ActiveValue::Set(param.course_id),
            is_started: ActiveValue::Set(param.is_started),
            is_completed: ActiveValue::Set(param.is_completed),
            grade: ActiveValue::Set(param.grade),
        }
        .insert(self.db)
        .await?;

        Ok(StudentCourseKey {
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
        })
    }

    /// Updates the progress of an enrollment, returning `None` if it does not exist
    pub async fn update(
        &self,
        param: UpdateStudentCourseParam,
    ) -> Result<Option<StudentCourseKey>, DbErr> {
        let Some(enrollment) =
            entity::prelude::StudentCourse::find_by_id((param.student_id, param.course_id))
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::student_course::ActiveModel = enrollment.into();
        active_model.is_started = ActiveValue::Set(param.is_started);
        active_model.is_completed = ActiveValue::Set(param.is_completed);
        active_model.grade = ActiveValue::Set(param.grade);

        let enrollment = active_model.update(self.db).await?;

        Ok(Some(StudentCourseKey {
            student_id: enrollment.student_id,
            course_id: enrollment.course_id,
        }))
    }

    /// Removes a student from a course
    pub async fn delete(&self, student_id: &str, course_id: i32) -> Result<bool, DbErr> {
        let result =
            entity::prelude::StudentCourse::delete_by_id((student_id.to_string(), course_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves the student and course names of the provided enrollments
    async fn with_names(
        &self,
        enrollments: Vec<entity::student_course::Model>,
    ) -> Result<Vec<StudentCourse>, DbErr> {
        if enrollments.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: Vec<String> = enrollments.iter().map(|e| e.student_id.clone()).collect();
        let course_ids: Vec<i32> = enrollments.iter().map(|e| e.course_id).collect();

        let student_names: HashMap<String, String> = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(student_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        let course_names: HashMap<i32, String> = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(course_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        Ok(enrollments
            .into_iter()
            .map(|enrollment| {
                let student_name = student_names
                    .get(&enrollment.student_id)
                    .cloned()
                    .unwrap_or_default();
                let course_name = course_names
                    .get(&enrollment.course_id)
                    .cloned()
                    .unwrap_or_default();

                StudentCourse::from_entity(enrollment, student_name, course_name)
            })
            .collect())
    }
}
