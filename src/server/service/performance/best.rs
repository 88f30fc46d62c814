//! Comparison rules behind personal bests, season bests and leaderboards.
//!
//! A performance is comparable through exactly one metric, picked by the discipline's
//! measurement unit and the first populated field in a fixed precedence:
//!
//! | unit            | field    | better |
//! |-----------------|----------|--------|
//! | `seconds`       | time     | lower  |
//! | `meters`, `cm`  | distance | higher |
//! | `meters`, `cm`  | height   | higher |
//! | any             | points   | higher |
//! | any             | position | lower  |
//!
//! Rows without any of these are never flagged as a best. Equal values never count as an
//! improvement, so the earlier row keeps the flag on ties.

use std::{cmp::Ordering, collections::HashMap};

use crate::{
    model::performance::PerformanceMetricsDto,
    server::model::{discipline::MeasurementUnit, performance::Performance},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Time,
    Distance,
    Height,
    Points,
    Position,
}

impl MetricKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
            Self::Height => "height",
            Self::Points => "points",
            Self::Position => "position",
        }
    }

    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Time | Self::Position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: f64,
}

impl Metric {
    /// Strictly better than `other`; metrics of different kinds never beat each other.
    pub fn beats(&self, other: &Metric) -> bool {
        if self.kind != other.kind {
            return false;
        }

        if self.kind.lower_is_better() {
            self.value < other.value
        } else {
            self.value > other.value
        }
    }
}

/// Picks the metric a row is compared by, if any.
pub fn comparable_metric(unit: MeasurementUnit, m: &PerformanceMetricsDto) -> Option<Metric> {
    let metric = |kind, value: Option<f64>| value.map(|value| Metric { kind, value });

    if unit == MeasurementUnit::Seconds {
        if let Some(found) = metric(MetricKind::Time, m.time) {
            return Some(found);
        }
    }

    if unit.is_length() {
        if let Some(found) = metric(MetricKind::Distance, m.distance)
            .or_else(|| metric(MetricKind::Height, m.height))
        {
            return Some(found);
        }
    }

    metric(MetricKind::Points, m.points)
        .or_else(|| metric(MetricKind::Position, m.position.map(f64::from)))
}

/// Whether `candidate` is a new best against the other rows of its scope.
///
/// True when the candidate is comparable and either no other row is compared by the
/// same metric or it strictly beats every one that is.
pub fn is_new_best<'a>(
    unit: MeasurementUnit,
    candidate: &PerformanceMetricsDto,
    others: impl IntoIterator<Item = &'a PerformanceMetricsDto>,
) -> bool {
    let Some(candidate) = comparable_metric(unit, candidate) else {
        return false;
    };

    others
        .into_iter()
        .filter_map(|other| comparable_metric(unit, other))
        .filter(|other| other.kind == candidate.kind)
        .all(|other| candidate.beats(&other))
}

/// Replays a scope's rows in chronological order and returns the row holding the flag
/// at the end.
///
/// Each row is judged exactly as `is_new_best` would have judged it when it was
/// recorded, against the rows before it.
pub fn replay_best<'a>(
    unit: MeasurementUnit,
    rows: impl IntoIterator<Item = (i32, &'a PerformanceMetricsDto)>,
) -> Option<i32> {
    let mut best_by_kind: HashMap<MetricKind, Metric> = HashMap::new();
    let mut holder = None;

    for (id, metrics) in rows {
        let Some(metric) = comparable_metric(unit, metrics) else {
            continue;
        };

        let improves = best_by_kind
            .get(&metric.kind)
            .is_none_or(|best| metric.beats(best));
        if improves {
            best_by_kind.insert(metric.kind, metric);
            holder = Some(id);
        }
    }

    holder
}

/// Orders a discipline's rows for its leaderboard and pairs each with its ranking value.
///
/// `seconds` ranks by time ascending, `meters`/`cm` by distance descending and then
/// height descending, everything else by finishing position ascending. Rows without the
/// ordering field are dropped and ties fall back to date, then ID.
pub fn rank_leaderboard(unit: MeasurementUnit, rows: Vec<Performance>) -> Vec<(Performance, f64)> {
    let mut ranked: Vec<(Performance, f64)> = match unit {
        MeasurementUnit::Seconds => rows
            .into_iter()
            .filter_map(|row| row.metrics.time.map(|value| (row, value)))
            .collect(),
        MeasurementUnit::Meters | MeasurementUnit::Centimeters => rows
            .into_iter()
            .filter_map(|row| {
                let value = row.metrics.distance.or(row.metrics.height)?;
                Some((row, value))
            })
            .collect(),
        MeasurementUnit::Points | MeasurementUnit::Unitless => rows
            .into_iter()
            .filter_map(|row| row.metrics.position.map(|value| (row, f64::from(value))))
            .collect(),
    };

    ranked.sort_by(|(a, a_value), (b, b_value)| {
        let primary = match unit {
            MeasurementUnit::Seconds => a_value.total_cmp(b_value),
            MeasurementUnit::Meters | MeasurementUnit::Centimeters => {
                compare_lengths(&a.metrics, &b.metrics)
            }
            MeasurementUnit::Points | MeasurementUnit::Unitless => a_value.total_cmp(b_value),
        };

        primary
            .then_with(|| a.date.cmp(&b.date))
            .then_with(|| a.id.cmp(&b.id))
    });

    ranked
}

/// Distance descending with missing distances last, then height descending.
fn compare_lengths(a: &PerformanceMetricsDto, b: &PerformanceMetricsDto) -> Ordering {
    let by_distance = match (a.distance, b.distance) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_distance.then_with(|| {
        let height = |m: &PerformanceMetricsDto| m.height.unwrap_or(f64::MIN);
        height(b).total_cmp(&height(a))
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn time(value: f64) -> PerformanceMetricsDto {
        PerformanceMetricsDto {
            time: Some(value),
            ..Default::default()
        }
    }

    fn distance(value: f64) -> PerformanceMetricsDto {
        PerformanceMetricsDto {
            distance: Some(value),
            ..Default::default()
        }
    }

    fn row(id: i32, day: i64, metrics: PerformanceMetricsDto) -> Performance {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + Duration::days(day);
        Performance {
            id,
            athlete_id: 1,
            event_id: 1,
            discipline_id: Some(1),
            season_id: 1,
            date,
            notes: None,
            metrics,
            is_personal_best: false,
            is_season_best: false,
            created_at: date,
        }
    }

    #[test]
    fn picks_metric_by_unit_and_precedence() {
        let m = PerformanceMetricsDto {
            time: Some(12.0),
            distance: Some(7.5),
            position: Some(2),
            ..Default::default()
        };

        assert_eq!(
            comparable_metric(MeasurementUnit::Seconds, &m).map(|m| m.kind),
            Some(MetricKind::Time)
        );
        assert_eq!(
            comparable_metric(MeasurementUnit::Meters, &m).map(|m| m.kind),
            Some(MetricKind::Distance)
        );
        assert_eq!(
            comparable_metric(MeasurementUnit::Unitless, &m).map(|m| m.kind),
            Some(MetricKind::Position)
        );
    }

    #[test]
    fn time_is_ignored_for_length_units() {
        assert_eq!(comparable_metric(MeasurementUnit::Meters, &time(12.0)), None);
    }

    #[test]
    fn row_without_comparable_metric_is_never_best() {
        let empty = PerformanceMetricsDto {
            goals_scored: Some(3),
            ..Default::default()
        };

        assert!(!is_new_best(MeasurementUnit::Seconds, &empty, []));
    }

    #[test]
    fn first_comparable_row_is_best_by_default() {
        assert!(is_new_best(MeasurementUnit::Seconds, &time(12.1), []));
    }

    #[test]
    fn lower_time_wins_and_ties_do_not() {
        let history = [time(12.1), time(11.9)];

        assert!(is_new_best(MeasurementUnit::Seconds, &time(11.8), &history));
        assert!(!is_new_best(MeasurementUnit::Seconds, &time(11.9), &history));
        assert!(!is_new_best(MeasurementUnit::Seconds, &time(12.5), &history));
    }

    #[test]
    fn higher_distance_wins() {
        let history = [distance(7.50), distance(7.48)];

        assert!(is_new_best(MeasurementUnit::Meters, &distance(7.60), &history));
        assert!(!is_new_best(MeasurementUnit::Meters, &distance(7.49), &history));
    }

    #[test]
    fn different_metric_kind_does_not_compete() {
        let position_only = PerformanceMetricsDto {
            position: Some(4),
            ..Default::default()
        };

        assert!(is_new_best(MeasurementUnit::Seconds, &position_only, &[time(11.0)]));
    }

    #[test]
    fn replay_keeps_earliest_on_ties() {
        let rows = [time(12.1), time(11.9), time(11.9), time(12.5)];
        let best = replay_best(
            MeasurementUnit::Seconds,
            rows.iter().enumerate().map(|(i, m)| (i as i32 + 1, m)),
        );

        assert_eq!(best, Some(2));
    }

    #[test]
    fn replay_of_empty_scope_has_no_holder() {
        assert_eq!(replay_best(MeasurementUnit::Seconds, []), None);
    }

    #[test]
    fn leaderboard_orders_times_ascending_and_breaks_ties_by_date() {
        let rows = vec![
            row(1, 2, time(11.9)),
            row(2, 1, time(11.9)),
            row(3, 0, time(10.8)),
            row(4, 0, PerformanceMetricsDto::default()),
        ];

        let ids: Vec<i32> = rank_leaderboard(MeasurementUnit::Seconds, rows)
            .into_iter()
            .map(|(row, _)| row.id)
            .collect();

        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn leaderboard_puts_missing_distance_after_heights() {
        let height_only = PerformanceMetricsDto {
            height: Some(2.1),
            ..Default::default()
        };
        let rows = vec![row(1, 0, height_only), row(2, 0, distance(7.1)), row(3, 0, distance(7.6))];

        let ranked = rank_leaderboard(MeasurementUnit::Meters, rows);
        let ids: Vec<i32> = ranked.iter().map(|(row, _)| row.id).collect();

        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(ranked[2].1, 2.1);
    }
}
