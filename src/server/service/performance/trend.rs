//! Least-squares trend over an athlete's results in one discipline.

use crate::model::performance::Trend;

use super::best::MetricKind;

/// Slopes within this band count as stable.
const STABLE_THRESHOLD: f64 = 0.01;

/// Slope of the least-squares line through `values`, using each value's index as x.
///
/// Returns `None` for fewer than two values.
pub fn slope(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    Some((n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x))
}

/// Classifies a slope for a metric, where a falling time or position is an improvement.
pub fn classify(kind: MetricKind, slope: Option<f64>) -> Trend {
    let Some(slope) = slope else {
        return Trend::InsufficientData;
    };

    if slope.abs() <= STABLE_THRESHOLD {
        return Trend::Stable;
    }

    let improving = if kind.lower_is_better() {
        slope < 0.0
    } else {
        slope > 0.0
    };

    if improving {
        Trend::Improving
    } else {
        Trend::Declining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_of_straight_line() {
        let slope = slope(&[10.0, 12.0, 14.0, 16.0]).unwrap();
        assert!((slope - 2.0).abs() < 1e-9);
    }

    #[test]
    fn single_value_has_no_slope() {
        assert_eq!(slope(&[7.5]), None);
        assert_eq!(classify(MetricKind::Distance, None), Trend::InsufficientData);
    }

    #[test]
    fn falling_times_improve() {
        let s = slope(&[12.4, 12.2, 11.9]);
        assert_eq!(classify(MetricKind::Time, s), Trend::Improving);
        assert_eq!(classify(MetricKind::Distance, s), Trend::Declining);
    }

    #[test]
    fn small_slope_is_stable() {
        let s = slope(&[7.50, 7.505, 7.51]);
        assert_eq!(classify(MetricKind::Distance, s), Trend::Stable);
    }
}
