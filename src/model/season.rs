use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeasonType {
    Spring,
    Fall,
    Summer,
    Indoor,
    Outdoor,
    Regular,
    Playoff,
}

impl SeasonType {
    pub const ALL: [SeasonType; 7] = [
        SeasonType::Spring,
        SeasonType::Fall,
        SeasonType::Summer,
        SeasonType::Indoor,
        SeasonType::Outdoor,
        SeasonType::Regular,
        SeasonType::Playoff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Spring => "SPRING",
            SeasonType::Fall => "FALL",
            SeasonType::Summer => "SUMMER",
            SeasonType::Indoor => "INDOOR",
            SeasonType::Outdoor => "OUTDOOR",
            SeasonType::Regular => "REGULAR",
            SeasonType::Playoff => "PLAYOFF",
        }
    }
}

impl FromStr for SeasonType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub id: i32,
    pub name: String,
    pub season_type: SeasonType,
    pub start_year: i32,
    pub end_year: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeasonDto {
    pub name: String,
    pub season_type: SeasonType,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeasonDto {
    pub name: Option<String>,
    pub season_type: Option<SeasonType>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatsDto {
    pub season_id: i32,
    pub gamedays: u64,
    pub events: u64,
    pub finished_events: u64,
    pub performances: u64,
}
