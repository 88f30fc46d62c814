//! Domain model for sports.

use crate::{
    model::sport::{CreateSportDto, SportDto, SportType, UpdateSportDto},
    server::{
        error::AppError,
        middleware::extract::Validate,
        util::parse::parse_stored_enum,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Sport {
    pub id: i32,
    pub name: SportType,
    pub is_team_sport: bool,
}

impl Sport {
    /// Converts an entity model to the sport domain model
    ///
    /// # Returns
    /// - `Ok(Sport)` - The converted sport domain model
    /// - `Err(AppError::InternalErr(ParseStoredEnum))` - Stored name is not a known sport
    pub fn from_entity(entity: entity::sport::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: parse_stored_enum("SportType", &entity.name)?,
            is_team_sport: entity.is_team_sport,
        })
    }

    pub fn into_dto(self) -> SportDto {
        SportDto {
            id: self.id,
            name: self.name,
            is_team_sport: self.is_team_sport,
        }
    }
}

/// Dependent record counts that block deleting a sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SportDependents {
    pub teams: u64,
    pub positions: u64,
    pub disciplines: u64,
    pub events: u64,
}

impl SportDependents {
    pub fn any(&self) -> bool {
        self.teams + self.positions + self.disciplines + self.events > 0
    }
}

// Sport names are an enumeration, so serde already rejects anything invalid.
impl Validate for CreateSportDto {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

impl Validate for UpdateSportDto {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}
