use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::teacher_course::{TeacherCourse, TeacherCourseKey};

pub struct TeacherCourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherCourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teaching assignments
    pub async fn get_all(&self) -> Result<Vec<TeacherCourse>, DbErr> {
        let assignments = entity::prelude::TeacherCourse::find()
            .order_by_asc(entity::teacher_course::Column::CourseId)
            .order_by_asc(entity::teacher_course::Column::TeacherId)
            .all(self.db)
            .await?;

        self.with_names(assignments).await
    }

    /// Gets all assignments of a teacher
    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<TeacherCourse>, DbErr> {
        let assignments = entity::prelude::TeacherCourse::find()
            .filter(entity::teacher_course::Column::TeacherId.eq(teacher_id))
            .order_by_asc(entity::teacher_course::Column::CourseId)
            .all(self.db)
            .await?;

        self.with_names(assignments).await
    }

    /// Gets all assignments for a course
    pub async fn get_by_course(&self, course_id: i32) -> Result<Vec<TeacherCourse>, DbErr> {
        let assignments = entity::prelude::TeacherCourse::find()
            .filter(entity::teacher_course::Column::CourseId.eq(course_id))
            .order_by_asc(entity::teacher_course::Column::TeacherId)
            .all(self.db)
            .await?;

        self.with_names(assignments).await
    }

    /// Gets a single assignment by its composite key
    pub async fn get_by_key(
        &self,
        teacher_id: &str,
        course_id: i32,
    ) -> Result<Option<TeacherCourse>, DbErr> {
        let Some(assignment) =
            entity::prelude::TeacherCourse::find_by_id((teacher_id.to_string(), course_id))
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        Ok(self.with_names(vec![assignment]).await?.into_iter().next())
    }

    /// Assigns a teacher to a course
    ///
    /// Fails with a database error when the pair already exists or either side is unknown.
    pub async fn create(&self, key: TeacherCourseKey) -> Result<TeacherCourseKey, DbErr> {
        let assignment = entity::teacher_course::ActiveModel {
            teacher_id: ActiveValue::Set(key.teacher_id),
            course_id: ActiveValue::Set(key.course_id),
        }
        .insert(self.db)
        .await?;

        Ok(TeacherCourseKey {
            teacher_id: assignment.teacher_id,
            course_id: assignment.course_id,
        })
    }

    /// Removes a teacher from a course
    pub async fn delete(&self, teacher_id: &str, course_id: i32) -> Result<bool, DbErr> {
        let result =
            entity::prelude::TeacherCourse::delete_by_id((teacher_id.to_string(), course_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    async fn with_names(
        &self,
        assignments: Vec<entity::teacher_course::Model>,
    ) -> Result<Vec<TeacherCourse>, DbErr> {
        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: Vec<String> = assignments.iter().map(|a| a.teacher_id.clone()).collect();
        let course_ids: Vec<i32> = assignments.iter().map(|a| a.course_id).collect();

        let teacher_names: HashMap<String, String> = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(teacher_ids))
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

        Ok(assignments
            .into_iter()
            .map(|assignment| {
                let teacher_name = teacher_names
                    .get(&assignment.teacher_id)
                    .cloned()
                    .unwrap_or_default();
                let course_name = course_names
                    .get(&assignment.course_id)
                    .cloned()
                    .unwrap_or_default();

                TeacherCourse::from_entity(assignment, teacher_name, course_name)
            })
            .collect())
    }
}
