//! Per-sport checks a performance row must pass before it is stored.

use crate::{
    model::{performance::PerformanceMetricsDto, sport::SportType},
    server::{
        error::AppError, middleware::extract::FieldErrors, model::performance::metric_values,
    },
};

const COMMON_FIELDS: [&str; 2] = ["position", "points"];

const MAX_ATHLETICS_TIME: f64 = 86_400.0;
const MAX_ATHLETICS_DISTANCE: f64 = 100_000.0;
const MAX_ATHLETICS_HEIGHT: f64 = 10.0;
const MAX_FOOTBALL_MINUTES: i32 = 130;
const MAX_FOOTBALL_GOALS: i32 = 10;
const MAX_BASKETBALL_MINUTES: i32 = 65;
const MAX_BASKETBALL_POINTS: f64 = 100.0;
const MAX_BOXING_ROUNDS: i32 = 12;

fn sport_fields(sport: SportType) -> &'static [&'static str] {
    match sport {
        SportType::Athletics => &["time", "distance", "height"],
        SportType::Football => &[
            "minutesPlayed",
            "goalsScored",
            "goalsConceded",
            "yellowCards",
            "redCards",
            "assists",
            "saves",
        ],
        SportType::Basketball => &[
            "minutesPlayed",
            "twoPoints",
            "threePoints",
            "freeThrows",
            "fieldGoals",
            "rebounds",
            "assists",
            "steals",
            "blocks",
            "turnovers",
        ],
        SportType::Wrestling => &["wins", "losses", "pins", "technicalFalls", "decisions"],
        SportType::Boxing => &[
            "rounds",
            "knockouts",
            "knockdowns",
            "punchesLanded",
            "punchesThrown",
        ],
    }
}

/// Validates the metrics of a row recorded at an event of `sport`.
///
/// Every populated field must belong to the sport (or be `position`/`points`) and stay
/// within its bounds. Returns a `Validation` error listing each offending field.
pub fn validate_sport_metrics(sport: SportType, m: &PerformanceMetricsDto) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    let allowed = sport_fields(sport);

    for (field, value) in metric_values(m) {
        if value.is_some() && !COMMON_FIELDS.contains(&field) && !allowed.contains(&field) {
            errors.add(field, format!("{} is not recorded for {}", field, sport));
        }
    }

    match sport {
        SportType::Athletics => check_athletics(m, &mut errors),
        SportType::Football => check_football(m, &mut errors),
        SportType::Basketball => check_basketball(m, &mut errors),
        SportType::Wrestling => check_wrestling(m, &mut errors),
        SportType::Boxing => check_boxing(m, &mut errors),
    }

    errors.into_result_with(format!("Invalid {} performance", sport))
}

fn non_negative(errors: &mut FieldErrors, m: &PerformanceMetricsDto, fields: &[&str]) {
    for (field, value) in metric_values(m) {
        if fields.contains(&field) && value.is_some_and(|v| v < 0.0) {
            errors.add(field, format!("{} cannot be negative", field));
        }
    }
}

fn at_most<T: PartialOrd + Copy + std::fmt::Display>(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<T>,
    max: T,
) {
    if value.is_some_and(|v| v > max) {
        errors.add(field, format!("{} cannot exceed {}", field, max));
    }
}

fn check_athletics(m: &PerformanceMetricsDto, errors: &mut FieldErrors) {
    if m.time.is_none() && m.distance.is_none() && m.height.is_none() && m.position.is_none() {
        errors.add(
            "metrics",
            "At least one of time, distance, height or position is required",
        );
    }

    errors.require_positive("time", m.time);
    errors.require_positive("distance", m.distance);
    errors.require_positive("height", m.height);
    errors.require_positive("position", m.position.map(f64::from));
    non_negative(errors, m, &["points"]);

    at_most(errors, "time", m.time, MAX_ATHLETICS_TIME);
    at_most(errors, "distance", m.distance, MAX_ATHLETICS_DISTANCE);
    at_most(errors, "height", m.height, MAX_ATHLETICS_HEIGHT);
}

fn check_football(m: &PerformanceMetricsDto, errors: &mut FieldErrors) {
    non_negative(errors, m, &COMMON_FIELDS);
    non_negative(errors, m, sport_fields(SportType::Football));

    at_most(errors, "minutesPlayed", m.minutes_played, MAX_FOOTBALL_MINUTES);
    at_most(errors, "yellowCards", m.yellow_cards, 2);
    at_most(errors, "redCards", m.red_cards, 1);
    at_most(errors, "goalsScored", m.goals_scored, MAX_FOOTBALL_GOALS);
}

fn check_basketball(m: &PerformanceMetricsDto, errors: &mut FieldErrors) {
    non_negative(errors, m, &COMMON_FIELDS);
    non_negative(errors, m, sport_fields(SportType::Basketball));

    at_most(errors, "minutesPlayed", m.minutes_played, MAX_BASKETBALL_MINUTES);
    at_most(errors, "points", m.points, MAX_BASKETBALL_POINTS);

    if let (Some(field_goals), Some(two), Some(three)) =
        (m.field_goals, m.two_points, m.three_points)
    {
        if field_goals > two + three {
            errors.add(
                "fieldGoals",
                "fieldGoals cannot exceed twoPoints plus threePoints",
            );
        }
    }
}

fn check_wrestling(m: &PerformanceMetricsDto, errors: &mut FieldErrors) {
    non_negative(errors, m, &COMMON_FIELDS);
    non_negative(errors, m, sport_fields(SportType::Wrestling));

    if let (Some(wins), Some(losses)) = (m.wins, m.losses) {
        if (wins > 0) == (losses > 0) {
            errors.add("wins", "Exactly one of wins or losses must be positive");
        }
    }

    if m.pins.is_some() || m.technical_falls.is_some() || m.decisions.is_some() {
        let victories =
            m.pins.unwrap_or(0) + m.technical_falls.unwrap_or(0) + m.decisions.unwrap_or(0);
        if victories > m.wins.unwrap_or(0) {
            errors.add(
                "pins",
                "pins, technicalFalls and decisions cannot exceed wins",
            );
        }
    }
}

fn check_boxing(m: &PerformanceMetricsDto, errors: &mut FieldErrors) {
    non_negative(errors, m, &COMMON_FIELDS);
    non_negative(errors, m, sport_fields(SportType::Boxing));

    at_most(errors, "rounds", m.rounds, MAX_BOXING_ROUNDS);

    if let (Some(landed), Some(thrown)) = (m.punches_landed, m.punches_thrown) {
        if landed > thrown {
            errors.add("punchesLanded", "punchesLanded cannot exceed punchesThrown");
        }
    }

    if let (Some(knockouts), Some(knockdowns)) = (m.knockouts, m.knockdowns) {
        if knockouts > knockdowns {
            errors.add("knockouts", "knockouts cannot exceed knockdowns");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_errors(result: Result<(), AppError>) -> Vec<String> {
        match result {
            Err(AppError::Validation { errors, .. }) => errors.into_keys().collect(),
            Ok(()) => Vec::new(),
            Err(other) => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn boxing_rejects_more_punches_landed_than_thrown() {
        let rejected = PerformanceMetricsDto {
            punches_landed: Some(50),
            punches_thrown: Some(40),
            ..Default::default()
        };
        let accepted = PerformanceMetricsDto {
            punches_landed: Some(30),
            punches_thrown: Some(40),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Boxing, &rejected)),
            vec!["punchesLanded"]
        );
        assert!(validate_sport_metrics(SportType::Boxing, &accepted).is_ok());
    }

    #[test]
    fn boxing_caps_rounds() {
        let m = PerformanceMetricsDto {
            rounds: Some(13),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Boxing, &m)),
            vec!["rounds"]
        );
    }

    #[test]
    fn wrestling_requires_exactly_one_of_wins_or_losses() {
        let both = PerformanceMetricsDto {
            wins: Some(1),
            losses: Some(1),
            ..Default::default()
        };
        let neither = PerformanceMetricsDto {
            wins: Some(0),
            losses: Some(0),
            ..Default::default()
        };
        let win = PerformanceMetricsDto {
            wins: Some(1),
            losses: Some(0),
            ..Default::default()
        };

        assert!(validate_sport_metrics(SportType::Wrestling, &both).is_err());
        assert!(validate_sport_metrics(SportType::Wrestling, &neither).is_err());
        assert!(validate_sport_metrics(SportType::Wrestling, &win).is_ok());
    }

    #[test]
    fn wrestling_outcome_rule_needs_both_fields() {
        let wins_only = PerformanceMetricsDto {
            wins: Some(0),
            ..Default::default()
        };
        let losses_only = PerformanceMetricsDto {
            losses: Some(2),
            ..Default::default()
        };

        assert!(validate_sport_metrics(SportType::Wrestling, &wins_only).is_ok());
        assert!(validate_sport_metrics(SportType::Wrestling, &losses_only).is_ok());
    }

    #[test]
    fn wrestling_victory_types_cannot_exceed_wins() {
        let m = PerformanceMetricsDto {
            wins: Some(1),
            pins: Some(1),
            decisions: Some(1),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Wrestling, &m)),
            vec!["pins"]
        );
    }

    #[test]
    fn football_bounds() {
        let m = PerformanceMetricsDto {
            minutes_played: Some(131),
            yellow_cards: Some(3),
            red_cards: Some(1),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Football, &m)),
            vec!["minutesPlayed", "yellowCards"]
        );
    }

    #[test]
    fn basketball_field_goals_bounded_by_made_shots() {
        let m = PerformanceMetricsDto {
            two_points: Some(4),
            three_points: Some(2),
            field_goals: Some(7),
            minutes_played: Some(40),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Basketball, &m)),
            vec!["fieldGoals"]
        );
    }

    #[test]
    fn athletics_needs_a_result_field() {
        let empty = PerformanceMetricsDto::default();
        let timed = PerformanceMetricsDto {
            time: Some(10.42),
            ..Default::default()
        };

        assert!(validate_sport_metrics(SportType::Athletics, &empty).is_err());
        assert!(validate_sport_metrics(SportType::Athletics, &timed).is_ok());
    }

    #[test]
    fn athletics_rejects_impossible_height() {
        let m = PerformanceMetricsDto {
            height: Some(12.0),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Athletics, &m)),
            vec!["height"]
        );
    }

    #[test]
    fn rejects_fields_from_other_sports() {
        let m = PerformanceMetricsDto {
            time: Some(11.0),
            goals_scored: Some(1),
            ..Default::default()
        };

        assert_eq!(
            field_errors(validate_sport_metrics(SportType::Football, &m)),
            vec!["time"]
        );
    }

    #[test]
    fn error_message_names_the_sport() {
        let m = PerformanceMetricsDto {
            rounds: Some(20),
            ..Default::default()
        };

        match validate_sport_metrics(SportType::Boxing, &m) {
            Err(AppError::Validation { message, .. }) => {
                assert_eq!(message, "Invalid BOXING performance")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
