//! Domain models for teacher qualifications

use crate::model::teacher_competence::{TeacherCompetenceDto, TeacherCompetenceKeyDto};

/// A competence held by a teacher, with display names of both sides
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCompetence {
    pub teacher_id: String,
    pub teacher_name: String,
    pub competence_id: i32,
    pub competence_name: String,
}

impl TeacherCompetence {
    pub fn from_entity(
        entity: entity::teacher_competence::Model,
        teacher_name: String,
        competence_name: String,
    ) -> Self {
        Self {
            teacher_id: entity.teacher_id,
            teacher_name,
            competence_id: entity.competence_id,
            competence_name,
        }
    }

    pub fn into_dto(self) -> TeacherCompetenceDto {
        TeacherCompetenceDto {
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            competence_id: self.competence_id,
            competence_name: self.competence_name,
        }
    }
}

/// Composite key of a teacher qualification
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherCompetenceKey {
    pub teacher_id: String,
    pub competence_id: i32,
}

impl TeacherCompetenceKey {
    pub fn from_dto(dto: TeacherCompetenceKeyDto) -> Self {
        Self {
            teacher_id: dto.teacher_id,
            competence_id: dto.competence_id,
        }
    }

    pub fn into_dto(self) -> TeacherCompetenceKeyDto {
        TeacherCompetenceKeyDto {
            teacher_id: self.teacher_id,
            competence_id: self.competence_id,
        }
    }
}
