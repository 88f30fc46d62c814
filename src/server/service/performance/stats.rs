//! Per-athlete listings and aggregate views over recorded performances.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};

use crate::{
    model::{
        performance::{
            AthletePerformanceSummaryDto, DisciplineBreakdownDto, TeamAthleteStatsDto,
            TeamEventStatsDto, Timeframe, Trend, TrendDto, TrendPointDto,
        },
        sport::SportType,
    },
    server::{
        data::{
            athlete::AthleteRepository, discipline::DisciplineRepository, event::EventRepository,
            performance::PerformanceRepository, season::SeasonRepository, sport::SportRepository,
            team::TeamRepository,
        },
        error::AppError,
        model::{
            athlete::Athlete,
            discipline::{Discipline, MeasurementUnit},
            performance::Performance,
        },
        util::stats::{average, metric_totals},
    },
};

use super::{
    best::{comparable_metric, rank_leaderboard, Metric, MetricKind},
    trend::{classify, slope},
    PerformanceService,
};

/// Metric kinds in the order a trend picks them when several are recorded.
const TREND_PRECEDENCE: [MetricKind; 5] = [
    MetricKind::Time,
    MetricKind::Distance,
    MetricKind::Height,
    MetricKind::Points,
    MetricKind::Position,
];

impl<'a> PerformanceService<'a> {
    /// Gets every performance of an athlete, most recent first
    pub async fn get_by_athlete(&self, athlete_id: i32) -> Result<Vec<Performance>, AppError> {
        self.find_athlete(athlete_id).await?;

        PerformanceRepository::new(self.db)
            .get_by_athlete(athlete_id, None)
            .await
    }

    /// Gets the rows currently flagged as the athlete's personal bests
    pub async fn get_personal_bests(
        &self,
        athlete_id: i32,
        discipline_id: Option<i32>,
    ) -> Result<Vec<Performance>, AppError> {
        self.find_athlete(athlete_id).await?;

        PerformanceRepository::new(self.db)
            .get_personal_bests(athlete_id, discipline_id)
            .await
    }

    pub async fn get_season_bests(
        &self,
        athlete_id: i32,
        season_id: i32,
    ) -> Result<Vec<Performance>, AppError> {
        self.find_athlete(athlete_id).await?;
        SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Season not found".to_string()))?;

        PerformanceRepository::new(self.db)
            .get_season_bests(athlete_id, season_id)
            .await
    }

    /// Summarizes an athlete's performances, optionally within one season
    ///
    /// Totals cover every recorded metric. The per-discipline breakdown reports the best
    /// and average of the value each discipline is ranked by.
    pub async fn get_athlete_summary(
        &self,
        athlete_id: i32,
        season_id: Option<i32>,
    ) -> Result<AthletePerformanceSummaryDto, AppError> {
        self.find_athlete(athlete_id).await?;

        let rows = PerformanceRepository::new(self.db)
            .get_by_athlete(athlete_id, season_id)
            .await?;

        let (totals, _) = metric_totals(rows.iter().map(|p| &p.metrics));
        let personal_bests = rows.iter().filter(|p| p.is_personal_best).count() as u64;
        let season_bests = rows.iter().filter(|p| p.is_season_best).count() as u64;
        let total_performances = rows.len() as u64;

        let mut by_discipline: BTreeMap<i32, Vec<Performance>> = BTreeMap::new();
        for row in rows {
            if let Some(discipline_id) = row.discipline_id {
                by_discipline.entry(discipline_id).or_default().push(row);
            }
        }

        let disciplines: BTreeMap<i32, Discipline> = DisciplineRepository::new(self.db)
            .get_by_ids(by_discipline.keys().copied().collect())
            .await?
            .into_iter()
            .map(|d| (d.id, d))
            .collect();

        let breakdown = by_discipline
            .into_iter()
            .map(|(discipline_id, rows)| {
                let unit = disciplines
                    .get(&discipline_id)
                    .map(Discipline::measurement_unit)
                    .unwrap_or(MeasurementUnit::Unitless);
                let performances = rows.len() as u64;
                let values: Vec<f64> = rank_leaderboard(unit, rows)
                    .into_iter()
                    .map(|(_, value)| value)
                    .collect();

                DisciplineBreakdownDto {
                    discipline_id,
                    performances,
                    best_value: values.first().copied(),
                    average_value: average(&values),
                }
            })
            .collect();

        Ok(AthletePerformanceSummaryDto {
            athlete_id,
            season_id,
            total_performances,
            personal_bests,
            season_bests,
            totals,
            disciplines: breakdown,
        })
    }

    /// Fits a trend through an athlete's results in a discipline
    ///
    /// The trend follows the highest-precedence comparable metric among the rows in the
    /// timeframe; rows compared by another metric are left out. `Season` uses the active
    /// season, falling back to the season of the athlete's latest row in the discipline.
    pub async fn get_trends(
        &self,
        athlete_id: i32,
        discipline_id: i32,
        timeframe: Timeframe,
    ) -> Result<TrendDto, AppError> {
        self.find_athlete(athlete_id).await?;
        let discipline = DisciplineRepository::new(self.db)
            .find_by_id(discipline_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))?;
        let unit = discipline.measurement_unit();

        let repo = PerformanceRepository::new(self.db);
        let mut rows = repo
            .get_by_athlete_and_discipline(athlete_id, discipline_id, None)
            .await?;

        match timeframe {
            Timeframe::All => {}
            Timeframe::Year => {
                let year = Utc::now().year();
                let start = NaiveDate::from_ymd_opt(year, 1, 1)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|d| d.and_utc());
                if let Some(start) = start {
                    rows.retain(|p| p.date >= start);
                }
            }
            Timeframe::Season => {
                let season_id = match SeasonRepository::new(self.db).find_active().await? {
                    Some(season) => Some(season.id),
                    None => rows.last().map(|p| p.season_id),
                };
                rows.retain(|p| Some(p.season_id) == season_id);
            }
        }

        let metrics: Vec<(&Performance, Metric)> = rows
            .iter()
            .filter_map(|p| comparable_metric(unit, &p.metrics).map(|m| (p, m)))
            .collect();
        let kind = TREND_PRECEDENCE
            .into_iter()
            .find(|kind| metrics.iter().any(|(_, m)| m.kind == *kind));

        let points: Vec<TrendPointDto> = metrics
            .iter()
            .filter(|(_, m)| Some(m.kind) == kind)
            .map(|(p, m)| TrendPointDto {
                performance_id: p.id,
                date: p.date,
                value: m.value,
            })
            .collect();

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let slope = slope(&values);
        let trend = match kind {
            Some(kind) => classify(kind, slope),
            None => Trend::InsufficientData,
        };
        let average_improvement = match trend {
            Trend::Improving | Trend::Declining => slope.map(f64::abs),
            Trend::Stable | Trend::InsufficientData => None,
        };

        Ok(TrendDto {
            athlete_id,
            discipline_id,
            timeframe,
            metric: kind.map(|k| k.name().to_string()),
            slope,
            trend,
            average_improvement,
            points,
        })
    }

    /// Gets an event's results by finishing position, then points
    pub async fn get_event_results(&self, event_id: i32) -> Result<Vec<Performance>, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        PerformanceRepository::new(self.db)
            .get_by_event(event_id)
            .await
    }

    /// Gets the rows a team's athletes recorded at an event with aggregated totals
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Team or event does not exist
    /// - `Err(AppError::BadRequest)` - The event is not of the team's sport
    pub async fn get_team_event_stats(
        &self,
        team_code: &str,
        event_id: i32,
    ) -> Result<TeamEventStatsDto, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_code(team_code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_code)))?;
        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        if event.sport_id != team.sport_id {
            return Err(AppError::BadRequest(format!(
                "Event {} is not of team {}'s sport",
                event.code, team.code
            )));
        }

        let athletes: BTreeMap<i32, Athlete> = AthleteRepository::new(self.db)
            .get_by_team(team.id)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let rows = PerformanceRepository::new(self.db)
            .get_by_event_and_athletes(event_id, athletes.keys().copied().collect())
            .await?;

        let (totals, _) = metric_totals(rows.iter().map(|p| &p.metrics));
        let athletes = rows
            .into_iter()
            .filter_map(|row| {
                let athlete = athletes.get(&row.athlete_id)?;
                Some(TeamAthleteStatsDto {
                    athlete_id: athlete.id,
                    athlete_code: athlete.code.clone(),
                    first_name: athlete.first_name.clone(),
                    last_name: athlete.last_name.clone(),
                    performance: row.into_dto(),
                })
            })
            .collect();

        Ok(TeamEventStatsDto {
            team_code: team.code,
            event_id,
            athletes,
            totals,
        })
    }

    /// Gets the most recent performances recorded at events of a sport
    pub async fn get_by_sport(
        &self,
        sport_type: SportType,
        limit: u64,
    ) -> Result<Vec<Performance>, AppError> {
        let sport = SportRepository::new(self.db)
            .find_by_name(sport_type)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sport {} not found", sport_type)))?;

        let event_ids = EventRepository::new(self.db)
            .get_by_sport(sport.id)
            .await?
            .into_iter()
            .map(|e| e.id)
            .collect();

        PerformanceRepository::new(self.db)
            .get_recent_by_events(event_ids, limit)
            .await
    }

    pub(super) async fn find_athlete(&self, athlete_id: i32) -> Result<Athlete, AppError> {
        AthleteRepository::new(self.db)
            .find_by_id(athlete_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))
    }
}
