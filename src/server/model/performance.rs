//! Domain model and parameters for performance rows.
//!
//! The sport-specific metrics travel as a [`PerformanceMetricsDto`] everywhere; the helpers
//! here enumerate them by wire name so validation, aggregation and merging can treat the
//! sparse columns uniformly.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::performance::{
        BulkPerformanceDto, ComparePerformancesDto, CreatePerformanceDto, PerformanceDto,
        PerformanceMetricsDto, UpdatePerformanceDto,
    },
    server::{
        error::AppError,
        middleware::extract::{FieldErrors, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    pub id: i32,
    pub athlete_id: i32,
    pub event_id: i32,
    pub discipline_id: Option<i32>,
    pub season_id: i32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub metrics: PerformanceMetricsDto,
    pub is_personal_best: bool,
    pub is_season_best: bool,
    pub created_at: DateTime<Utc>,
}

impl Performance {
    pub fn from_entity(entity: entity::performance::Model) -> Self {
        let metrics = PerformanceMetricsDto {
            position: entity.position,
            points: entity.points,
            time: entity.time,
            distance: entity.distance,
            height: entity.height,
            minutes_played: entity.minutes_played,
            assists: entity.assists,
            goals_scored: entity.goals_scored,
            goals_conceded: entity.goals_conceded,
            yellow_cards: entity.yellow_cards,
            red_cards: entity.red_cards,
            saves: entity.saves,
            two_points: entity.two_points,
            three_points: entity.three_points,
            free_throws: entity.free_throws,
            field_goals: entity.field_goals,
            rebounds: entity.rebounds,
            steals: entity.steals,
            blocks: entity.blocks,
            turnovers: entity.turnovers,
            wins: entity.wins,
            losses: entity.losses,
            pins: entity.pins,
            technical_falls: entity.technical_falls,
            decisions: entity.decisions,
            rounds: entity.rounds,
            knockouts: entity.knockouts,
            knockdowns: entity.knockdowns,
            punches_landed: entity.punches_landed,
            punches_thrown: entity.punches_thrown,
        };

        Self {
            id: entity.id,
            athlete_id: entity.athlete_id,
            event_id: entity.event_id,
            discipline_id: entity.discipline_id,
            season_id: entity.season_id,
            date: entity.date,
            notes: entity.notes,
            metrics,
            is_personal_best: entity.is_personal_best,
            is_season_best: entity.is_season_best,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PerformanceDto {
        PerformanceDto {
            id: self.id,
            athlete_id: self.athlete_id,
            event_id: self.event_id,
            discipline_id: self.discipline_id,
            season_id: self.season_id,
            date: self.date,
            notes: self.notes,
            metrics: self.metrics,
            is_personal_best: self.is_personal_best,
            is_season_best: self.is_season_best,
            created_at: self.created_at,
        }
    }
}

/// Every metric as `(wire name, value)`, integers widened to `f64`.
pub fn metric_values(m: &PerformanceMetricsDto) -> [(&'static str, Option<f64>); 30] {
    let int = |v: Option<i32>| v.map(f64::from);

    [
        ("position", int(m.position)),
        ("points", m.points),
        ("time", m.time),
        ("distance", m.distance),
        ("height", m.height),
        ("minutesPlayed", int(m.minutes_played)),
        ("assists", int(m.assists)),
        ("goalsScored", int(m.goals_scored)),
        ("goalsConceded", int(m.goals_conceded)),
        ("yellowCards", int(m.yellow_cards)),
        ("redCards", int(m.red_cards)),
        ("saves", int(m.saves)),
        ("twoPoints", int(m.two_points)),
        ("threePoints", int(m.three_points)),
        ("freeThrows", int(m.free_throws)),
        ("fieldGoals", int(m.field_goals)),
        ("rebounds", int(m.rebounds)),
        ("steals", int(m.steals)),
        ("blocks", int(m.blocks)),
        ("turnovers", int(m.turnovers)),
        ("wins", int(m.wins)),
        ("losses", int(m.losses)),
        ("pins", int(m.pins)),
        ("technicalFalls", int(m.technical_falls)),
        ("decisions", int(m.decisions)),
        ("rounds", int(m.rounds)),
        ("knockouts", int(m.knockouts)),
        ("knockdowns", int(m.knockdowns)),
        ("punchesLanded", int(m.punches_landed)),
        ("punchesThrown", int(m.punches_thrown)),
    ]
}

/// Overlays every metric set in `patch` onto `base`.
pub fn merge_metrics(
    base: PerformanceMetricsDto,
    patch: PerformanceMetricsDto,
) -> PerformanceMetricsDto {
    PerformanceMetricsDto {
        position: patch.position.or(base.position),
        points: patch.points.or(base.points),
        time: patch.time.or(base.time),
        distance: patch.distance.or(base.distance),
        height: patch.height.or(base.height),
        minutes_played: patch.minutes_played.or(base.minutes_played),
        assists: patch.assists.or(base.assists),
        goals_scored: patch.goals_scored.or(base.goals_scored),
        goals_conceded: patch.goals_conceded.or(base.goals_conceded),
        yellow_cards: patch.yellow_cards.or(base.yellow_cards),
        red_cards: patch.red_cards.or(base.red_cards),
        saves: patch.saves.or(base.saves),
        two_points: patch.two_points.or(base.two_points),
        three_points: patch.three_points.or(base.three_points),
        free_throws: patch.free_throws.or(base.free_throws),
        field_goals: patch.field_goals.or(base.field_goals),
        rebounds: patch.rebounds.or(base.rebounds),
        steals: patch.steals.or(base.steals),
        blocks: patch.blocks.or(base.blocks),
        turnovers: patch.turnovers.or(base.turnovers),
        wins: patch.wins.or(base.wins),
        losses: patch.losses.or(base.losses),
        pins: patch.pins.or(base.pins),
        technical_falls: patch.technical_falls.or(base.technical_falls),
        decisions: patch.decisions.or(base.decisions),
        rounds: patch.rounds.or(base.rounds),
        knockouts: patch.knockouts.or(base.knockouts),
        knockdowns: patch.knockdowns.or(base.knockdowns),
        punches_landed: patch.punches_landed.or(base.punches_landed),
        punches_thrown: patch.punches_thrown.or(base.punches_thrown),
    }
}

pub fn has_any_metric(m: &PerformanceMetricsDto) -> bool {
    metric_values(m).iter().any(|(_, value)| value.is_some())
}

/// Parameters for inserting a performance row, with the season resolved from the event
/// and best flags already decided.
#[derive(Debug, Clone)]
pub struct CreatePerformanceParam {
    pub athlete_id: i32,
    pub event_id: i32,
    pub discipline_id: Option<i32>,
    pub season_id: i32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub metrics: PerformanceMetricsDto,
    pub is_personal_best: bool,
    pub is_season_best: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceSortField {
    #[default]
    Date,
    Time,
    Distance,
    Points,
    Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Filters and ordering for the paginated performance listing.
#[derive(Debug, Clone, Default)]
pub struct PerformanceFilter {
    pub athlete_id: Option<i32>,
    pub event_id: Option<i32>,
    pub discipline_id: Option<i32>,
    pub season_id: Option<i32>,
    pub sort_by: PerformanceSortField,
    pub sort_order: SortOrder,
}

/// Where personal-best and season-best flags are maintained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestScope {
    pub athlete_id: i32,
    pub discipline_id: Option<i32>,
    /// `Some` narrows the scope to one season.
    pub season_id: Option<i32>,
}

fn check_finite(errors: &mut FieldErrors, metrics: &PerformanceMetricsDto) {
    for (name, value) in metric_values(metrics) {
        if value.is_some_and(|v| !v.is_finite()) {
            errors.add(name, format!("{} must be a finite number", name));
        }
    }
}

impl Validate for CreatePerformanceDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        check_finite(&mut errors, &self.metrics);

        errors.into_result()
    }
}

impl Validate for UpdatePerformanceDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        check_finite(&mut errors, &self.metrics);

        errors.into_result()
    }
}

impl Validate for BulkPerformanceDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        if self.performances.is_empty() {
            errors.add("performances", "At least one performance is required");
        }
        for row in &self.performances {
            check_finite(&mut errors, &row.metrics);
        }

        errors.into_result()
    }
}

impl Validate for ComparePerformancesDto {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = FieldErrors::new();
        let mut ids = self.athlete_ids.clone();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() < 2 {
            errors.add("athleteIds", "At least two distinct athletes are required");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_patch_values() {
        let base = PerformanceMetricsDto {
            time: Some(12.0),
            position: Some(3),
            ..Default::default()
        };
        let patch = PerformanceMetricsDto {
            time: Some(11.5),
            ..Default::default()
        };

        let merged = merge_metrics(base, patch);
        assert_eq!(merged.time, Some(11.5));
        assert_eq!(merged.position, Some(3));
    }

    #[test]
    fn metric_values_uses_wire_names() {
        let metrics = PerformanceMetricsDto {
            punches_landed: Some(30),
            ..Default::default()
        };

        let values = metric_values(&metrics);
        assert!(values.contains(&("punchesLanded", Some(30.0))));
        assert_eq!(values.iter().filter(|(_, v)| v.is_some()).count(), 1);
    }

    #[test]
    fn compare_requires_two_distinct_athletes() {
        let dto = ComparePerformancesDto {
            athlete_ids: vec![4, 4],
            discipline_id: 1,
            season_id: None,
        };

        assert!(dto.validate().is_err());
    }
}
