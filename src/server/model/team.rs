//! Domain model and parameters for teams.

use crate::{
    model::team::{CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub sport_id: i32,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            sport_id: entity.sport_id,
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            code: self.code,
            name: self.name,
            sport_id: self.sport_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParam {
    pub code: String,
    pub name: String,
    pub sport_id: i32,
}

impl From<CreateTeamDto> for CreateTeamParam {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            code: dto.code.trim().to_string(),
            name: dto.name.trim().to_string(),
            sport_id: dto.sport_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTeamParam {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl From<UpdateTeamDto> for UpdateTeamParam {
    fn from(dto: UpdateTeamDto) -> Self {
        Self {
            code: dto.code.map(|code| code.trim().to_string()),
            name: dto.name.map(|name| name.trim().to_string()),
        }
    }
}

impl Validate for CreateTeamDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("code", &self.code);
        errors.require_text("name", &self.name);

        errors.into_result()
    }
}

impl Validate for UpdateTeamDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("code", self.code.as_deref());
        errors.optional_text("name", self.name.as_deref());

        errors.into_result()
    }
}
