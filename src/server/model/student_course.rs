//! Domain & parameter models for enrollment operations
//!
//! An enrollment links a student to a course and records the student's progress.
//! The domain model carries the display names of both sides so that lists can be
//! rendered without further lookups.

use crate::model::student_course::{
    CreateStudentCourseDto, StudentCourseDto, StudentCourseKeyDto, UpdateStudentCourseDto,
};

/// The enrollment domain model
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCourse {
    pub student_id: String,
    pub student_name: String,
    pub course_id: i32,
    pub course_name: String,
    pub is_started: bool,
    pub is_completed: bool,
    pub grade: Option<String>,
}

impl StudentCourse {
    /// Converts an enrollment entity to the domain model
    ///
    /// # Arguments
    /// - `entity` - The enrollment entity model from the database
    /// - `student_name` - Full name of the enrolled student
    /// - `course_name` - Name of the course
    pub fn from_entity(
        entity: entity::student_course::Model,
        student_name: String,
        course_name: String,
    ) -> Self {
        Self {
            student_id: entity.student_id,
            student_name,
            course_id: entity.course_id,
            course_name,
            is_started: entity.is_started,
            is_completed: entity.is_completed,
            grade: entity.grade,
        }
    }

    pub fn into_dto(self) -> StudentCourseDto {
        StudentCourseDto {
            student_id: self.student_id,
            student_name: self.student_name,
            course_id: self.course_id,
            course_name: self.course_name,
            is_started: self.is_started,
            is_completed: self.is_completed,
            grade: self.grade,
        }
    }
}

/// Composite key of an enrollment
#[derive(Debug, Clone, PartialEq)]
pub struct StudentCourseKey {
    pub student_id: String,
    pub course_id: i32,
}

impl StudentCourseKey {
    pub fn into_dto(self) -> StudentCourseKeyDto {
        StudentCourseKeyDto {
            student_id: self.student_id,
            course_id: self.course_id,
        }
    }
}

/// Parameters for enrolling a student in a course
#[derive(Debug, Clone)]
pub struct CreateStudentCourseParam {
    pub student_id: String,
    pub course_id: i32,
    pub is_started: bool,
    pub is_completed: bool,
    pub grade: Option<String>,
}

impl CreateStudentCourseParam {
    pub fn from_dto(dto: CreateStudentCourseDto) -> Self {
        Self {
            student_id: dto.student_id,
            course_id: dto.course_id,
            is_started: dto.is_started,
            is_completed: dto.is_completed,
            grade: dto.grade,
        }
    }
}

/// Parameters for updating the progress of an existing enrollment
#[derive(Debug, Clone)]
pub struct UpdateStudentCourseParam {
    pub student_id: String,
    pub course_id: i32,
    pub is_started: bool,
    pub is_completed: bool,
    pub grade: Option<String>,
}

impl UpdateStudentCourseParam {
    pub fn from_dto(dto: UpdateStudentCourseDto) -> Self {
        Self {
            student_id: dto.student_id,
            course_id: dto.course_id,
            is_started: dto.is_started,
            is_completed: dto.is_completed,
            grade: dto.grade,
        }
    }
}
