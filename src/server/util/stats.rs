//! Aggregation helpers for performance statistics.

use std::collections::BTreeMap;

use crate::{model::performance::PerformanceMetricsDto, server::model::performance::metric_values};

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Per-metric sums over `rows` along with how many rows recorded each metric.
///
/// Metrics no row recorded are absent from both maps.
pub fn metric_totals<'a>(
    rows: impl IntoIterator<Item = &'a PerformanceMetricsDto>,
) -> (BTreeMap<String, f64>, BTreeMap<String, u64>) {
    let mut totals = BTreeMap::new();
    let mut counts = BTreeMap::new();

    for metrics in rows {
        for (name, value) in metric_values(metrics) {
            if let Some(value) = value {
                *totals.entry(name.to_string()).or_insert(0.0) += value;
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
    }

    (totals, counts)
}

/// Averages of each metric over the rows that recorded it, rounded to two decimals.
pub fn metric_averages<'a>(
    rows: impl IntoIterator<Item = &'a PerformanceMetricsDto>,
) -> BTreeMap<String, f64> {
    let (totals, counts) = metric_totals(rows);

    totals
        .into_iter()
        .filter_map(|(name, total)| {
            let count = *counts.get(&name)?;
            Some((name, round2(total / count as f64)))
        })
        .collect()
}

/// Mean of `values` rounded to two decimals, `None` when empty.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(round2(values.iter().sum::<f64>() / values.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_skip_unrecorded_metrics() {
        let rows = [
            PerformanceMetricsDto {
                goals_scored: Some(2),
                assists: Some(1),
                ..Default::default()
            },
            PerformanceMetricsDto {
                goals_scored: Some(1),
                ..Default::default()
            },
        ];

        let (totals, counts) = metric_totals(&rows);

        assert_eq!(totals.get("goalsScored"), Some(&3.0));
        assert_eq!(counts.get("assists"), Some(&1));
        assert!(!totals.contains_key("saves"));
    }

    #[test]
    fn averages_use_rows_recording_the_metric() {
        let rows = [
            PerformanceMetricsDto {
                time: Some(10.0),
                ..Default::default()
            },
            PerformanceMetricsDto {
                time: Some(10.333),
                position: Some(1),
                ..Default::default()
            },
        ];

        let averages = metric_averages(&rows);

        assert_eq!(averages.get("time"), Some(&10.17));
        assert_eq!(averages.get("position"), Some(&1.0));
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[1.0, 2.0]), Some(1.5));
    }
}
