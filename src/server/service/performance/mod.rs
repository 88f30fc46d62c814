//! Performance recording and the statistics computed from stored rows.
//!
//! The service is organized into separate modules by concern:
//! - `recording` - Create, bulk create, update and delete with best-flag maintenance
//! - `stats` - Per-athlete listings, summaries, trends and event or team breakdowns
//! - `ranking` - Discipline leaderboards, records and athlete comparisons
//! - `best` - Comparison rules behind personal and season bests
//! - `validation` - Per-sport metric checks
//! - `trend` - Least-squares trend classification

pub mod best;
pub mod ranking;
pub mod recording;
pub mod stats;
pub mod trend;
pub mod validation;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{discipline::DisciplineRepository, performance::PerformanceRepository},
    error::AppError,
    model::{
        discipline::MeasurementUnit,
        performance::{BestScope, Performance, PerformanceFilter},
    },
};

use self::best::replay_best;

pub struct PerformanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PerformanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of performances matching the filter, with the total match count
    pub async fn get_paginated(
        &self,
        filter: &PerformanceFilter,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<Performance>, u64), AppError> {
        PerformanceRepository::new(self.db)
            .get_paginated(filter, page, limit)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Performance, AppError> {
        PerformanceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Performance not found".to_string()))
    }
}

/// Measurement unit governing rows of `discipline_id`; team-sport rows have none.
pub(crate) async fn unit_of<C: ConnectionTrait>(
    db: &C,
    discipline_id: Option<i32>,
) -> Result<MeasurementUnit, AppError> {
    let Some(discipline_id) = discipline_id else {
        return Ok(MeasurementUnit::Unitless);
    };

    let discipline = DisciplineRepository::new(db)
        .find_by_id(discipline_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))?;

    Ok(discipline.measurement_unit())
}

/// Recomputes both best flags of an athlete's discipline from scratch
///
/// The personal-best scope spans every season; the season-best scope is limited to
/// `season_id`. Each flag ends up on the row `replay_best` picks, or on no row.
/// Team-sport rows carry no discipline and never hold a best, so they are skipped.
pub(crate) async fn recalculate_bests<C: ConnectionTrait>(
    db: &C,
    unit: MeasurementUnit,
    athlete_id: i32,
    discipline_id: Option<i32>,
    season_id: i32,
) -> Result<(), AppError> {
    let Some(discipline_id) = discipline_id else {
        return Ok(());
    };

    let repo = PerformanceRepository::new(db);

    let personal = BestScope {
        athlete_id,
        discipline_id: Some(discipline_id),
        season_id: None,
    };
    let rows = repo.get_in_scope(personal, None).await?;
    let holder = replay_best(unit, rows.iter().map(|row| (row.id, &row.metrics)));
    repo.clear_personal_best(personal, holder).await?;
    if let Some(id) = holder {
        repo.set_personal_best(id, true).await?;
    }

    let season = BestScope {
        season_id: Some(season_id),
        ..personal
    };
    let rows = repo.get_in_scope(season, None).await?;
    let holder = replay_best(unit, rows.iter().map(|row| (row.id, &row.metrics)));
    repo.clear_season_best(season, holder).await?;
    if let Some(id) = holder {
        repo.set_season_best(id, true).await?;
    }

    Ok(())
}
