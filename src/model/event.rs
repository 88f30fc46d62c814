use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{athlete::Gender, sport::SportType, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
    Canceled,
    Suspended,
}

impl EventStatus {
    pub const ALL: [EventStatus; 6] = [
        EventStatus::Scheduled,
        EventStatus::Live,
        EventStatus::Finished,
        EventStatus::Postponed,
        EventStatus::Canceled,
        EventStatus::Suspended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "SCHEDULED",
            EventStatus::Live => "LIVE",
            EventStatus::Finished => "FINISHED",
            EventStatus::Postponed => "POSTPONED",
            EventStatus::Canceled => "CANCELED",
            EventStatus::Suspended => "SUSPENDED",
        }
    }
}

impl FromStr for EventStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub sport_id: i32,
    pub year: i32,
    pub season_id: i32,
    pub gameday_id: i32,
    pub venue_id: Option<i32>,
    pub gender: Option<Gender>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub name: String,
    pub code: String,
    pub sport_type: SportType,
    /// Defaults to the year of `startDate`.
    pub year: Option<i32>,
    pub season_id: i32,
    pub gameday_id: i32,
    pub venue_id: Option<i32>,
    pub gender: Option<Gender>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Defaults to `SCHEDULED`.
    pub status: Option<EventStatus>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventDto {
    pub name: Option<String>,
    pub venue_id: Option<i32>,
    pub gender: Option<Gender>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventStatusDto {
    pub status: EventStatus,
}
