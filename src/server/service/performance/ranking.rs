//! Discipline leaderboards and head-to-head comparisons.

use std::collections::{HashMap, HashSet};

use crate::{
    model::performance::{
        AthleteComparisonDto, ComparePerformancesDto, ComparisonDto, DisciplineRecordsDto,
        LeaderboardEntryDto,
    },
    server::{
        data::{
            athlete::AthleteRepository, discipline::DisciplineRepository,
            performance::PerformanceRepository,
        },
        error::AppError,
        model::{athlete::Athlete, discipline::Discipline},
        util::stats::average,
    },
};

use super::{best::rank_leaderboard, PerformanceService};

/// Entries listed beside a discipline's record.
const RECORDS_TOP: u64 = 10;

impl<'a> PerformanceService<'a> {
    /// Gets the best `limit` performances of a discipline, optionally within a season
    ///
    /// Ordering follows the discipline's unit: times ascending, distances (then heights)
    /// descending, anything else by finishing position. Rows without that value are not
    /// ranked.
    pub async fn get_top(
        &self,
        discipline_id: i32,
        limit: u64,
        season_id: Option<i32>,
    ) -> Result<Vec<LeaderboardEntryDto>, AppError> {
        let discipline = self.find_discipline(discipline_id).await?;

        self.leaderboard(&discipline, limit, season_id).await
    }

    /// Gets a discipline's record holder and the top entries behind it
    pub async fn get_records(
        &self,
        discipline_id: i32,
        season_id: Option<i32>,
    ) -> Result<DisciplineRecordsDto, AppError> {
        let discipline = self.find_discipline(discipline_id).await?;
        let top = self.leaderboard(&discipline, RECORDS_TOP, season_id).await?;

        Ok(DisciplineRecordsDto {
            discipline_id,
            season_id,
            unit: discipline.unit,
            record: top.first().cloned(),
            top,
        })
    }

    /// Compares athletes within one discipline, optionally within a season
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The discipline or one of the athletes does not exist
    pub async fn compare(&self, dto: ComparePerformancesDto) -> Result<ComparisonDto, AppError> {
        let discipline = self.find_discipline(dto.discipline_id).await?;
        let unit = discipline.measurement_unit();

        let mut seen = HashSet::new();
        let athlete_ids: Vec<i32> = dto
            .athlete_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        let athletes: HashMap<i32, Athlete> = AthleteRepository::new(self.db)
            .get_by_ids(athlete_ids.clone())
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let missing: Vec<String> = athlete_ids
            .iter()
            .filter(|id| !athletes.contains_key(id))
            .map(|id| id.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::NotFound(format!(
                "Athletes not found: {}",
                missing.join(", ")
            )));
        }

        let repo = PerformanceRepository::new(self.db);
        let mut comparisons = Vec::with_capacity(athlete_ids.len());
        for id in athlete_ids {
            let Some(athlete) = athletes.get(&id) else {
                continue;
            };

            let rows = repo
                .get_by_athlete_and_discipline(id, discipline.id, dto.season_id)
                .await?;
            let performances = rows.len() as u64;
            let values: Vec<f64> = rank_leaderboard(unit, rows)
                .into_iter()
                .map(|(_, value)| value)
                .collect();

            let personal_best = repo
                .get_personal_bests(id, Some(discipline.id))
                .await?
                .into_iter()
                .next()
                .map(|p| p.into_dto());

            comparisons.push(AthleteComparisonDto {
                athlete_id: id,
                first_name: athlete.first_name.clone(),
                last_name: athlete.last_name.clone(),
                performances,
                best_value: values.first().copied(),
                average_value: average(&values),
                personal_best,
            });
        }

        Ok(ComparisonDto {
            discipline_id: discipline.id,
            season_id: dto.season_id,
            athletes: comparisons,
        })
    }

    async fn leaderboard(
        &self,
        discipline: &Discipline,
        limit: u64,
        season_id: Option<i32>,
    ) -> Result<Vec<LeaderboardEntryDto>, AppError> {
        let rows = PerformanceRepository::new(self.db)
            .get_by_discipline(discipline.id, season_id)
            .await?;

        let ranked: Vec<_> = rank_leaderboard(discipline.measurement_unit(), rows)
            .into_iter()
            .take(limit as usize)
            .collect();

        let athlete_ids: Vec<i32> = ranked.iter().map(|(p, _)| p.athlete_id).collect();
        let athletes: HashMap<i32, Athlete> = AthleteRepository::new(self.db)
            .get_by_ids(athlete_ids)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        Ok(ranked
            .into_iter()
            .enumerate()
            .filter_map(|(index, (performance, value))| {
                let athlete = athletes.get(&performance.athlete_id)?;
                Some(LeaderboardEntryDto {
                    rank: index as u32 + 1,
                    athlete_id: athlete.id,
                    athlete_code: athlete.code.clone(),
                    first_name: athlete.first_name.clone(),
                    last_name: athlete.last_name.clone(),
                    value,
                    performance: performance.into_dto(),
                })
            })
            .collect())
    }

    async fn find_discipline(&self, id: i32) -> Result<Discipline, AppError> {
        DisciplineRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))
    }
}
