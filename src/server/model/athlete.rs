//! Domain models and parameters for athletes.
//!
//! An athlete either plays a team sport (linked to a team and a position) or competes
//! in an individual sport (linked to one or more disciplines with a current rank). The
//! domain model carries the resolved team and position codes and the discipline links
//! so it can be rendered without further lookups.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::{
    model::{
        athlete::{
            AddAthleteDisciplineDto, AthleteDisciplineDto, AthleteDto, CreateIndividualAthleteDto,
            CreateTeamAthleteDto, Gender, UpdateAthleteDto, UpdateAthleteRankDto,
        },
        sport::SportType,
    },
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
        util::parse::parse_stored_enum,
    },
};

/// Minimum age in whole years for registering a new athlete.
pub const MINIMUM_AGE: i32 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct AthleteDiscipline {
    pub discipline_id: i32,
    pub code: String,
    pub name: String,
    pub current_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Athlete {
    pub id: i32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<i32>,
    pub team_code: Option<String>,
    pub position_id: Option<i32>,
    pub position_code: Option<String>,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bio: Option<String>,
    pub is_active: bool,
    pub disciplines: Vec<AthleteDiscipline>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Athlete {
    /// Converts an entity model plus its resolved relations to the athlete domain model
    ///
    /// # Arguments
    /// - `entity` - The athlete row
    /// - `team_code` - Code of the athlete's team, if any
    /// - `position_code` - Code of the athlete's position, if any
    /// - `disciplines` - Discipline links of the athlete
    ///
    /// # Returns
    /// - `Ok(Athlete)` - The converted domain model
    /// - `Err(AppError::InternalErr(ParseStoredEnum))` - Stored gender is unknown
    pub fn from_entity(
        entity: entity::athlete::Model,
        team_code: Option<String>,
        position_code: Option<String>,
        disciplines: Vec<AthleteDiscipline>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            gender: parse_stored_enum("Gender", &entity.gender)?,
            code: entity.code,
            first_name: entity.first_name,
            last_name: entity.last_name,
            team_id: entity.team_id,
            team_code,
            position_id: entity.position_id,
            position_code,
            date_of_birth: entity.date_of_birth,
            nationality: entity.nationality,
            height: entity.height,
            weight: entity.weight,
            bio: entity.bio,
            is_active: entity.is_active,
            disciplines,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts the athlete into its DTO with the given public avatar URL.
    pub fn into_dto(self, avatar_url: String) -> AthleteDto {
        AthleteDto {
            id: self.id,
            code: self.code,
            first_name: self.first_name,
            last_name: self.last_name,
            team_id: self.team_id,
            team_code: self.team_code,
            position_id: self.position_id,
            position_code: self.position_code,
            date_of_birth: self.date_of_birth,
            nationality: self.nationality,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
            bio: self.bio,
            is_active: self.is_active,
            disciplines: self
                .disciplines
                .into_iter()
                .map(|d| AthleteDisciplineDto {
                    discipline_id: d.discipline_id,
                    code: d.code,
                    name: d.name,
                    current_rank: d.current_rank,
                })
                .collect(),
            avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Age in whole years on `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Parameters for inserting an athlete row.
///
/// Team athletes carry `team_id` and `position_id`; individual athletes carry neither
/// and get their discipline links inserted separately.
#[derive(Debug, Clone)]
pub struct CreateAthleteParam {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub team_id: Option<i32>,
    pub position_id: Option<i32>,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bio: Option<String>,
}

/// Fields to change on an athlete; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateAthleteParam {
    pub code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_id: Option<i32>,
    pub position_id: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for the paginated athlete listing. Every filter is optional and they combine
/// with AND.
#[derive(Debug, Clone, Default)]
pub struct AthleteFilter {
    /// Case-insensitive match against code, first name or last name.
    pub search: Option<String>,
    pub position_code: Option<String>,
    pub team_code: Option<String>,
    pub sport_type: Option<SportType>,
    pub gender: Option<Gender>,
    pub is_active: Option<bool>,
    pub discipline_code: Option<String>,
}

fn validate_profile(
    errors: &mut FieldErrors,
    code: &str,
    first_name: &str,
    last_name: &str,
    nationality: &str,
    height: f64,
    weight: f64,
    date_of_birth: NaiveDate,
) {
    errors.require_text("code", code);
    errors.require_text("firstName", first_name);
    errors.require_text("lastName", last_name);
    errors.require_text("nationality", nationality);
    errors.require_positive("height", Some(height));
    errors.require_positive("weight", Some(weight));

    if age_on(date_of_birth, Utc::now().date_naive()) < MINIMUM_AGE {
        errors.add(
            "dateOfBirth",
            format!("Athlete must be at least {} years old", MINIMUM_AGE),
        );
    }
}

impl Validate for CreateTeamAthleteDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        validate_profile(
            &mut errors,
            &self.code,
            &self.first_name,
            &self.last_name,
            &self.nationality,
            self.height,
            self.weight,
            self.date_of_birth,
        );
        errors.require_text("teamCode", &self.team_code);
        errors.require_text("positionCode", &self.position_code);

        errors.into_result()
    }
}

impl Validate for CreateIndividualAthleteDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        validate_profile(
            &mut errors,
            &self.code,
            &self.first_name,
            &self.last_name,
            &self.nationality,
            self.height,
            self.weight,
            self.date_of_birth,
        );

        if self.disciplines.is_empty() {
            errors.add("disciplines", "At least one discipline is required");
        }
        for entry in &self.disciplines {
            if entry.code.trim().is_empty() {
                errors.add("disciplines", "Discipline code is required");
            }
            if entry.current_rank.is_some_and(|rank| rank <= 0) {
                errors.add("disciplines", "currentRank must be positive");
            }
        }

        errors.into_result()
    }
}

impl Validate for UpdateAthleteDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.optional_text("code", self.code.as_deref());
        errors.optional_text("firstName", self.first_name.as_deref());
        errors.optional_text("lastName", self.last_name.as_deref());
        errors.optional_text("nationality", self.nationality.as_deref());
        errors.optional_text("teamCode", self.team_code.as_deref());
        errors.optional_text("positionCode", self.position_code.as_deref());
        errors.require_positive("height", self.height);
        errors.require_positive("weight", self.weight);

        errors.into_result()
    }
}

impl Validate for UpdateAthleteRankDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("disciplineCode", &self.discipline_code);
        if self.new_rank <= 0 {
            errors.add("newRank", "newRank must be positive");
        }

        errors.into_result()
    }
}

impl Validate for AddAthleteDisciplineDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        errors.require_text("disciplineCode", &self.discipline_code);
        if self.current_rank.is_some_and(|rank| rank <= 0) {
            errors.add("currentRank", "currentRank must be positive");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_counts_completed_years() {
        assert_eq!(age_on(date(2000, 6, 15), date(2016, 6, 14)), 15);
        assert_eq!(age_on(date(2000, 6, 15), date(2016, 6, 15)), 16);
        assert_eq!(age_on(date(2000, 6, 15), date(2020, 1, 1)), 19);
    }

    #[test]
    fn rejects_underage_team_athlete() {
        let today = Utc::now().date_naive();
        let dto = CreateTeamAthleteDto {
            code: "BB001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
            team_code: "TIGERS".to_string(),
            position_code: "PG".to_string(),
            sport_type: SportType::Basketball,
            date_of_birth: today.with_year(today.year() - 15).unwrap_or(today),
            nationality: "ES".to_string(),
            gender: Gender::Female,
            height: 170.0,
            weight: 60.0,
            bio: None,
        };

        match dto.validate() {
            Err(AppError::Validation { errors, .. }) => assert!(errors.contains_key("dateOfBirth")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn individual_athlete_needs_a_discipline() {
        let dto = CreateIndividualAthleteDto {
            code: "ATH001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
            sport_type: SportType::Athletics,
            disciplines: Vec::new(),
            date_of_birth: date(2000, 1, 1),
            nationality: "ES".to_string(),
            gender: Gender::Female,
            height: 170.0,
            weight: 60.0,
            bio: None,
        };

        match dto.validate() {
            Err(AppError::Validation { errors, .. }) => assert!(errors.contains_key("disciplines")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
