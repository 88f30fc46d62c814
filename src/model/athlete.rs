use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{performance::PerformanceDto, sport::SportType, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDisciplineDto {
    pub discipline_id: i32,
    pub code: String,
    pub name: String,
    pub current_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteDto {
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
    pub disciplines: Vec<AthleteDisciplineDto>,
    /// Derived from the request host, not stored.
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamAthleteDto {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub team_code: String,
    pub position_code: String,
    pub sport_type: SportType,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineEntryDto {
    pub code: String,
    pub current_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIndividualAthleteDto {
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub sport_type: SportType,
    pub disciplines: Vec<DisciplineEntryDto>,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAthleteDto {
    pub code: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub team_code: Option<String>,
    pub position_code: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAthleteDto {
    pub id: i32,
    /// `true` when the athlete was deactivated because performance history exists.
    pub soft_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAthleteRankDto {
    pub discipline_code: String,
    pub new_rank: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddAthleteDisciplineDto {
    pub discipline_code: String,
    pub current_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteStatsDto {
    pub athlete: AthleteDto,
    pub season_id: Option<i32>,
    pub performances: Vec<PerformanceDto>,
}

/// Aggregates of one athlete's performances within a season.
///
/// `totals` and `averages` are keyed by the camelCase metric name and only contain
/// metrics recorded at least once. Averages are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteSeasonSummaryDto {
    pub athlete_id: i32,
    pub season_id: i32,
    pub total_performances: u64,
    pub totals: BTreeMap<String, f64>,
    pub averages: BTreeMap<String, f64>,
    pub best_time: Option<f64>,
    pub best_distance: Option<f64>,
    pub best_position: Option<i32>,
}
