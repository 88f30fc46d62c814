use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Every sport-specific metric a performance row can carry.
///
/// Shared between request and response bodies; unset metrics are omitted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetricsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_played: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_scored: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_conceded: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yellow_cards: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red_cards: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saves: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub three_points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_throws: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_goals: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rebounds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steals: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnovers: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_falls: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decisions: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knockouts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knockdowns: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punches_landed: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punches_thrown: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceDto {
    pub id: i32,
    pub athlete_id: i32,
    pub event_id: i32,
    pub discipline_id: Option<i32>,
    pub season_id: i32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metrics: PerformanceMetricsDto,
    pub is_personal_best: bool,
    pub is_season_best: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerformanceDto {
    pub athlete_id: i32,
    pub event_id: i32,
    pub discipline_id: Option<i32>,
    /// Defaults to the time of submission.
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metrics: PerformanceMetricsDto,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePerformanceDto {
    pub date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub metrics: PerformanceMetricsDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkPerformanceDto {
    pub performances: Vec<CreatePerformanceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    /// 1-based rank within the returned list.
    pub rank: u32,
    pub athlete_id: i32,
    pub athlete_code: String,
    pub first_name: String,
    pub last_name: String,
    pub value: f64,
    pub performance: PerformanceDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineRecordsDto {
    pub discipline_id: i32,
    pub season_id: Option<i32>,
    pub unit: Option<String>,
    pub record: Option<LeaderboardEntryDto>,
    pub top: Vec<LeaderboardEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineBreakdownDto {
    pub discipline_id: i32,
    pub performances: u64,
    pub best_value: Option<f64>,
    pub average_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthletePerformanceSummaryDto {
    pub athlete_id: i32,
    pub season_id: Option<i32>,
    pub total_performances: u64,
    pub personal_bests: u64,
    pub season_bests: u64,
    pub totals: BTreeMap<String, f64>,
    pub disciplines: Vec<DisciplineBreakdownDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamAthleteStatsDto {
    pub athlete_id: i32,
    pub athlete_code: String,
    pub first_name: String,
    pub last_name: String,
    pub performance: PerformanceDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamEventStatsDto {
    pub team_code: String,
    pub event_id: i32,
    pub athletes: Vec<TeamAthleteStatsDto>,
    pub totals: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparePerformancesDto {
    pub athlete_ids: Vec<i32>,
    pub discipline_id: i32,
    pub season_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AthleteComparisonDto {
    pub athlete_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub performances: u64,
    pub best_value: Option<f64>,
    pub average_value: Option<f64>,
    pub personal_best: Option<PerformanceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDto {
    pub discipline_id: i32,
    pub season_id: Option<i32>,
    pub athletes: Vec<AthleteComparisonDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Season,
    Year,
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPointDto {
    pub performance_id: i32,
    pub date: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendDto {
    pub athlete_id: i32,
    pub discipline_id: i32,
    pub timeframe: Timeframe,
    /// Name of the compared metric, e.g. `time`; absent when no row is comparable.
    pub metric: Option<String>,
    pub slope: Option<f64>,
    pub trend: Trend,
    /// Magnitude of the slope when a trend was detected.
    pub average_improvement: Option<f64>,
    pub points: Vec<TrendPointDto>,
}
