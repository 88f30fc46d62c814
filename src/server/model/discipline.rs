//! Domain model and parameters for individual-sport disciplines.
//!
//! A discipline's free-form `unit` decides how its results are compared, see
//! [`MeasurementUnit`].

use crate::{
    model::discipline::{
        AddDisciplineAthleteDto, CreateDisciplineDto, DisciplineAthleteDto, DisciplineDto,
        UpdateDisciplineDto, UpdateDisciplineRankDto,
    },
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
        model::athlete::Athlete,
    },
};

/// Measurement unit of a discipline, parsed from its stored `unit` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementUnit {
    Seconds,
    Meters,
    Centimeters,
    Points,
    Unitless,
}

impl MeasurementUnit {
    /// Case-insensitive; unknown or missing units are `Unitless`.
    pub fn from_unit(unit: Option<&str>) -> Self {
        match unit.map(|u| u.trim().to_ascii_lowercase()).as_deref() {
            Some("seconds") => Self::Seconds,
            Some("meters") => Self::Meters,
            Some("cm") => Self::Centimeters,
            Some("points") => Self::Points,
            _ => Self::Unitless,
        }
    }

    pub fn is_length(&self) -> bool {
        matches!(self, Self::Meters | Self::Centimeters)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Discipline {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
    pub unit: Option<String>,
}

impl Discipline {
    pub fn from_entity(entity: entity::discipline::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            sport_id: entity.sport_id,
            description: entity.description,
            unit: entity.unit,
        }
    }

    pub fn measurement_unit(&self) -> MeasurementUnit {
        MeasurementUnit::from_unit(self.unit.as_deref())
    }

    pub fn into_dto(self) -> DisciplineDto {
        DisciplineDto {
            id: self.id,
            name: self.name,
            code: self.code,
            sport_id: self.sport_id,
            description: self.description,
            unit: self.unit,
        }
    }
}

/// An athlete registered for a discipline with their rank in it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedAthlete {
    pub current_rank: Option<i32>,
    pub athlete: Athlete,
}

impl RankedAthlete {
    pub fn into_dto(self, avatar_url: String) -> DisciplineAthleteDto {
        DisciplineAthleteDto {
            current_rank: self.current_rank,
            athlete: self.athlete.into_dto(avatar_url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDisciplineParam {
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
    pub unit: Option<String>,
}

impl From<CreateDisciplineDto> for CreateDisciplineParam {
    fn from(dto: CreateDisciplineDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_string(),
            sport_id: dto.sport_id,
            description: dto.description,
            unit: dto.unit,
        }
    }
}

/// Code and sport are immutable once a discipline exists.
#[derive(Debug, Clone, Default)]
pub struct UpdateDisciplineParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
}

impl From<UpdateDisciplineDto> for UpdateDisciplineParam {
    fn from(dto: UpdateDisciplineDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
            unit: dto.unit,
        }
    }
}

impl Validate for CreateDisciplineDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        errors.require_text("code", &self.code);

        errors.into_result()
    }
}

impl Validate for UpdateDisciplineDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("name", self.name.as_deref());

        errors.into_result()
    }
}

impl Validate for AddDisciplineAthleteDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if let Some(rank) = self.current_rank {
            if rank <= 0 {
                errors.add("currentRank", "currentRank must be positive");
            }
        }

        errors.into_result()
    }
}

impl Validate for UpdateDisciplineRankDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.current_rank <= 0 {
            errors.add("currentRank", "currentRank must be positive");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::MeasurementUnit;

    #[test]
    fn parses_units_case_insensitively() {
        assert_eq!(MeasurementUnit::from_unit(Some("Seconds")), MeasurementUnit::Seconds);
        assert_eq!(MeasurementUnit::from_unit(Some("meters")), MeasurementUnit::Meters);
        assert_eq!(MeasurementUnit::from_unit(Some("cm")), MeasurementUnit::Centimeters);
        assert_eq!(MeasurementUnit::from_unit(Some("kg")), MeasurementUnit::Unitless);
        assert_eq!(MeasurementUnit::from_unit(None), MeasurementUnit::Unitless);
    }
}
