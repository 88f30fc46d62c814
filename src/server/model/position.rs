//! Domain model and parameters for team-sport positions.

use crate::{
    model::position::{CreatePositionDto, PositionDto, UpdatePositionDto},
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
}

impl Position {
    pub fn from_entity(entity: entity::position::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            sport_id: entity.sport_id,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> PositionDto {
        PositionDto {
            id: self.id,
            name: self.name,
            code: self.code,
            sport_id: self.sport_id,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePositionParam {
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
}

impl From<CreatePositionDto> for CreatePositionParam {
    fn from(dto: CreatePositionDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            sport_id: dto.sport_id,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePositionParam {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
}

impl From<UpdatePositionDto> for UpdatePositionParam {
    fn from(dto: UpdatePositionDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            code: dto.code.map(|code| code.trim().to_string()),
            description: dto.description,
        }
    }
}

impl Validate for CreatePositionDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        errors.require_text("code", &self.code);

        errors.into_result()
    }
}

impl Validate for UpdatePositionDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("name", self.name.as_deref());
        errors.optional_text("code", self.code.as_deref());

        errors.into_result()
    }
}
