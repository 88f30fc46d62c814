use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::athlete::AthleteDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub sport_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRosterDto {
    pub team: TeamDto,
    pub athletes: Vec<AthleteDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    pub code: String,
    pub name: String,
    pub sport_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamDto {
    pub code: Option<String>,
    pub name: Option<String>,
}
