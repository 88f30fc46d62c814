use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::athlete::AthleteDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
    /// `seconds`, `meters`, `cm`, `points` or absent
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDisciplineDto {
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub description: Option<String>,
    pub unit: Option<String>,
}

/// Code and sport are fixed once a discipline exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDisciplineDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineAthleteDto {
    pub current_rank: Option<i32>,
    pub athlete: AthleteDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDisciplineAthleteDto {
    pub discipline_id: i32,
    pub athlete_id: i32,
    pub current_rank: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDisciplineRankDto {
    pub current_rank: i32,
}
