use crate::{
    model::season::{CreateSeasonDto, SeasonDto, SeasonType, UpdateSeasonDto},
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
        util::parse::parse_stored_enum,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub season_type: SeasonType,
    pub start_year: i32,
    pub end_year: i32,
    pub is_active: bool,
}

impl Season {
    pub fn from_entity(entity: entity::season::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            season_type: parse_stored_enum("SeasonType", &entity.season_type)?,
            name: entity.name,
            start_year: entity.start_year,
            end_year: entity.end_year,
            is_active: entity.is_active,
        })
    }

    pub fn into_dto(self) -> SeasonDto {
        SeasonDto {
            id: self.id,
            name: self.name,
            season_type: self.season_type,
            start_year: self.start_year,
            end_year: self.end_year,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSeasonParam {
    pub name: Option<String>,
    pub season_type: Option<SeasonType>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

fn check_years(errors: &mut FieldErrors, start_year: i32, end_year: i32) {
    if end_year < start_year {
        errors.add("endYear", "endYear must not be before startYear");
    }
}

impl Validate for CreateSeasonDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        check_years(&mut errors, self.start_year, self.end_year);

        errors.into_result()
    }
}

// Only checks years when both are given; the service re-checks against stored values.
impl Validate for UpdateSeasonDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("name", self.name.as_deref());
        if let (Some(start), Some(end)) = (self.start_year, self.end_year) {
            check_years(&mut errors, start, end);
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_end_before_start() {
        let dto = CreateSeasonDto {
            name: "2025".to_string(),
            season_type: SeasonType::Regular,
            start_year: 2026,
            end_year: 2025,
            is_active: false,
        };

        assert!(matches!(dto.validate(), Err(AppError::Validation { .. })));
    }

    #[test]
    fn accepts_single_year_season() {
        let dto = CreateSeasonDto {
            name: "Indoor 2025".to_string(),
            season_type: SeasonType::Indoor,
            start_year: 2025,
            end_year: 2025,
            is_active: true,
        };

        assert!(dto.validate().is_ok());
    }
}
