//! Domain & parameter models for competence operations

use crate::model::competence::{CompetenceDto, CreateCompetenceDto, UpdateCompetenceDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Competence {
    pub id: i32,
    pub name: String,
}

impl Competence {
    pub fn from_entity(entity: entity::competence::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CompetenceDto {
        CompetenceDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCompetenceParam {
    pub name: String,
}

impl CreateCompetenceParam {
    pub fn from_dto(dto: CreateCompetenceDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCompetenceParam {
    pub id: i32,
    pub name: String,
}

impl UpdateCompetenceParam {
    pub fn from_dto(dto: UpdateCompetenceDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
