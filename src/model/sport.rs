use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{discipline::DisciplineDto, position::PositionDto, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SportType {
    Basketball,
    Football,
    Athletics,
    Wrestling,
    Boxing,
}

impl SportType {
    pub const ALL: [SportType; 5] = [
        SportType::Basketball,
        SportType::Football,
        SportType::Athletics,
        SportType::Wrestling,
        SportType::Boxing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportType::Basketball => "BASKETBALL",
            SportType::Football => "FOOTBALL",
            SportType::Athletics => "ATHLETICS",
            SportType::Wrestling => "WRESTLING",
            SportType::Boxing => "BOXING",
        }
    }
}

impl FromStr for SportType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SportDto {
    pub id: i32,
    pub name: SportType,
    pub is_team_sport: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SportDetailDto {
    pub id: i32,
    pub name: SportType,
    pub is_team_sport: bool,
    pub positions: Vec<PositionDto>,
    pub disciplines: Vec<DisciplineDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSportDto {
    pub name: SportType,
    pub is_team_sport: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSportDto {
    pub name: Option<SportType>,
    pub is_team_sport: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SportStatsDto {
    pub sport_id: i32,
    pub name: SportType,
    pub teams: u64,
    pub positions: u64,
    pub disciplines: u64,
    pub events: u64,
    pub active_athletes: u64,
}
