//! Domain models for teaching assignments

use crate::model::teacher_course::{TeacherCourseDto, TeacherCourseKeyDto};

/// A teacher assigned to a course, with display names of both sides
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCourse {
    pub teacher_id: String,
    pub teacher_name: String,
    pub course_id: i32,
    pub course_name: String,
}

impl TeacherCourse {
    pub fn from_entity(
        entity: entity::teacher_course::Model,
        teacher_name: String,
        course_name: String,
    ) -> Self {
        Self {
            teacher_id: entity.teacher_id,
            teacher_name,
            course_id: entity.course_id,
            course_name,
        }
    }

    pub fn into_dto(self) -> TeacherCourseDto {
        TeacherCourseDto {
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            course_id: self.course_id,
            course_name: self.course_name,
        }
    }
}

/// Composite key of a teaching assignment
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCourseKey {
    pub teacher_id: String,
    pub course_id: i32,
}

impl TeacherCourseKey {
    pub fn from_dto(dto: TeacherCourseKeyDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            course_id: dto.course_id,
        }
    }

    pub fn into_dto(self) -> TeacherCourseKeyDto {
        TeacherCourseKeyDto {
            teacher_id: self.teacher_id,
            course_id: self.course_id,
        }
    }
}
