//! Course data repository for database operations
//!
//! Provides the `CourseRepository` for managing courses and listing them by category,
//! by enrolled student and by assigned teacher. Courses are always returned with the
//! name of their category.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::course::{Course, CreateCourseParam, UpdateCourseParam};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courses ordered by name
    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::course::Column::Name)
            .all(self.db)
            .await?;

        Ok(courses
            .into_iter()
            .map(|(course, category)| Course::from_entity(course, category))
            .collect())
    }

    /// Gets a course by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let course = entity::prelude::Course::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        Ok(course.map(|(course, category)| Course::from_entity(course, category)))
    }

    /// Gets all courses in a category
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::CategoryId.eq(category_id))
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::course::Column::Name)
            .all(self.db)
            .await?;

        Ok(courses
            .into_iter()
            .map(|(course, category)| Course::from_entity(course, category))
            .collect())
    }

    /// Gets all courses a student is enrolled in
    pub async fn get_by_student(&self, student_id: &str) -> Result<Vec<Course>, DbErr> {
        let course_ids: Vec<i32> = entity::prelude::StudentCourse::find()
            .select_only()
            .column(entity::student_course::Column::CourseId)
            .filter(entity::student_course::Column::StudentId.eq(student_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.get_by_ids(course_ids).await
    }

    /// Gets all courses a teacher is assigned to
    pub async fn get_by_teacher(&self, teacher_id: &str) -> Result<Vec<Course>, DbErr> {
        let course_ids: Vec<i32> = entity::prelude::TeacherCourse::find()
            .select_only()
            .column(entity::teacher_course::Column::CourseId)
            .filter(entity::teacher_course::Column::TeacherId.eq(teacher_id))
            .into_tuple()
            .all(self.db)
            .await?;

        self.get_by_ids(course_ids).await
    }

    /// Creates a new course
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course with its category name
    /// - `Err(DbErr)` - Database error during insert, e.g. unknown category
    pub async fn create(&self, param: CreateCourseParam) -> Result<Course, DbErr> {
        let course = entity::course::ActiveModel {
            code: ActiveValue::Set(param.code),
            name: ActiveValue::Set(param.name),
            summary: ActiveValue::Set(param.summary),
            description: ActiveValue::Set(param.description),
            days: ActiveValue::Set(param.days),
            hours: ActiveValue::Set(param.hours),
            category_id: ActiveValue::Set(param.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let category = entity::prelude::Category::find_by_id(course.category_id)
            .one(self.db)
            .await?;

        Ok(Course::from_entity(course, category))
    }

    /// Updates every field of a course, returning `None` if it does not exist
    pub async fn update(&self, param: UpdateCourseParam) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.code = ActiveValue::Set(param.code);
        active_model.name = ActiveValue::Set(param.name);
        active_model.summary = ActiveValue::Set(param.summary);
        active_model.description = ActiveValue::Set(param.description);
        active_model.days = ActiveValue::Set(param.days);
        active_model.hours = ActiveValue::Set(param.hours);
        active_model.category_id = ActiveValue::Set(param.category_id);

        let course = active_model.update(self.db).await?;

        let category = entity::prelude::Category::find_by_id(course.category_id)
            .one(self.db)
            .await?;

        Ok(Some(Course::from_entity(course, category)))
    }

    /// Deletes a course together with its enrollments and teaching assignments
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Course>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = entity::prelude::Course::find()
            .filter(entity::course::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::course::Column::Name)
            .all(self.db)
            .await?;

        Ok(courses
            .into_iter()
            .map(|(course, category)| Course::from_entity(course, category))
            .collect())
    }
}
