//! Domain & parameter models for category operations

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParam {
    pub name: String,
}

impl CreateCategoryParam {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParam {
    pub id: i32,
    pub name: String,
}

impl UpdateCategoryParam {
    pub fn from_dto(dto: UpdateCategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
