use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GamedayDto {
    pub id: i32,
    pub name: String,
    pub game_number: Option<i32>,
    pub season_id: i32,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub finished: bool,
    pub is_previous: bool,
    pub is_current: bool,
    pub is_next: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGamedayDto {
    pub name: String,
    pub season_id: i32,
    pub game_number: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Defaults to `false`.
    pub is_current: Option<bool>,
    /// Defaults to `true` unless `isCurrent` is set.
    pub is_next: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGamedayDto {
    pub name: Option<String>,
    pub game_number: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
}
