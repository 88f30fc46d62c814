//! Recording performances and keeping best flags consistent.
//!
//! Every write runs in one transaction together with the flag updates it causes, so at
//! most one row per athlete and discipline holds the personal-best flag (and one per
//! season the season-best flag) once the transaction commits.

use chrono::Utc;
use sea_orm::{ConnectionTrait, TransactionTrait};

use crate::{
    model::{
        event::EventStatus,
        performance::{BulkPerformanceDto, CreatePerformanceDto, UpdatePerformanceDto},
    },
    server::{
        data::{
            athlete::AthleteRepository, discipline::DisciplineRepository, event::EventRepository,
            performance::PerformanceRepository, sport::SportRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            discipline::MeasurementUnit,
            event::{accepts_performances, Event},
            performance::{
                has_any_metric, merge_metrics, BestScope, CreatePerformanceParam, Performance,
            },
            sport::Sport,
        },
    },
};

use super::{
    best::{is_new_best, replay_best},
    recalculate_bests, unit_of,
    validation::validate_sport_metrics,
    PerformanceService,
};

impl<'a> PerformanceService<'a> {
    /// Records a performance and updates the athlete's best flags
    ///
    /// # Returns
    /// - `Ok(Performance)` - The stored row with its best flags
    /// - `Err(AppError::NotFound)` - Athlete, event or discipline does not exist
    /// - `Err(AppError::BadRequest)` - Inactive athlete, event not accepting results, or
    ///   a discipline that does not fit the event's sport
    /// - `Err(AppError::Validation)` - The metrics break the sport's rules
    /// - `Err(AppError::Conflict)` - The athlete already has a row for this event and
    ///   discipline
    pub async fn create(&self, dto: CreatePerformanceDto) -> Result<Performance, AppError> {
        let txn = self.db.begin().await?;

        let (param, unit) = prepare(&txn, dto).await?;
        let performance = insert_with_bests(&txn, param, unit).await?;

        txn.commit().await?;

        Ok(performance)
    }

    /// Records several performances atomically, evaluating best flags in submission order
    ///
    /// Any failing row rejects the whole batch; error fields and messages name the index
    /// of the offending row.
    pub async fn create_bulk(&self, dto: BulkPerformanceDto) -> Result<Vec<Performance>, AppError> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(dto.performances.len());
        for (index, row) in dto.performances.into_iter().enumerate() {
            let (param, unit) = prepare(&txn, row).await.map_err(|e| at_index(e, index))?;
            let performance = insert_with_bests(&txn, param, unit)
                .await
                .map_err(|e| at_index(e, index))?;
            created.push(performance);
        }

        txn.commit().await?;

        tracing::info!("Recorded {} performances in bulk", created.len());

        Ok(created)
    }

    /// Updates a performance
    ///
    /// Rows of a finished event only accept note changes. Changed metrics are validated
    /// merged over the stored ones and best flags are re-evaluated against the other rows
    /// of the scope.
    pub async fn update(&self, id: i32, dto: UpdatePerformanceDto) -> Result<Performance, AppError> {
        let txn = self.db.begin().await?;
        let repo = PerformanceRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Performance not found".to_string()))?;
        let event = find_event(&txn, existing.event_id).await?;

        let changes_result = has_any_metric(&dto.metrics) || dto.date.is_some();
        if event.status == EventStatus::Finished && changes_result {
            return Err(AppError::BadRequest(
                "Only notes can be changed for performances of a finished event".to_string(),
            ));
        }

        let metrics = merge_metrics(existing.metrics, dto.metrics);
        if has_any_metric(&dto.metrics) {
            let sport = find_sport(&txn, event.sport_id).await?;
            validate_sport_metrics(sport.name, &metrics)?;
        }

        let updated = repo
            .update(
                id,
                dto.date.unwrap_or(existing.date),
                dto.notes.or(existing.notes),
                &metrics,
            )
            .await?
            .ok_or_else(|| AppError::NotFound("Performance not found".to_string()))?;

        if changes_result {
            let unit = unit_of(&txn, updated.discipline_id).await?;
            reevaluate_bests(&txn, &updated, unit).await?;
        }

        let performance = repo.find_by_id(id).await?.ok_or(InternalError::MissingAfterWrite {
            entity: "performance",
            id,
        })?;

        txn.commit().await?;

        Ok(performance)
    }

    /// Deletes a performance and recomputes the athlete's bests in its discipline
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No performance with the provided ID
    /// - `Err(AppError::BadRequest)` - The row belongs to a finished event
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = PerformanceRepository::new(&txn);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Performance not found".to_string()))?;
        let event = find_event(&txn, existing.event_id).await?;

        if event.status == EventStatus::Finished {
            return Err(AppError::BadRequest(
                "Performances of a finished event cannot be deleted".to_string(),
            ));
        }

        repo.delete(id).await?;

        if existing.is_personal_best || existing.is_season_best {
            let unit = unit_of(&txn, existing.discipline_id).await?;
            recalculate_bests(
                &txn,
                unit,
                existing.athlete_id,
                existing.discipline_id,
                existing.season_id,
            )
            .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}

/// Checks a submitted row against its athlete, event, sport and discipline
///
/// # Returns
/// - `Ok((param, unit))` - Insert parameters with best flags unset, and the unit its
///   bests are compared by
async fn prepare<C: ConnectionTrait>(
    db: &C,
    dto: CreatePerformanceDto,
) -> Result<(CreatePerformanceParam, MeasurementUnit), AppError> {
    let athlete = AthleteRepository::new(db)
        .find_by_id(dto.athlete_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Athlete not found".to_string()))?;
    if !athlete.is_active {
        return Err(AppError::BadRequest(format!(
            "Athlete {} is inactive",
            athlete.code
        )));
    }

    let event = find_event(db, dto.event_id).await?;
    if !accepts_performances(event.status) {
        return Err(AppError::BadRequest(format!(
            "Performances cannot be recorded for a {} event",
            event.status
        )));
    }

    let sport = find_sport(db, event.sport_id).await?;
    let unit = match (sport.is_team_sport, dto.discipline_id) {
        (true, Some(_)) => {
            return Err(AppError::field(
                "disciplineId",
                format!("{} performances cannot carry a discipline", sport.name),
            ))
        }
        (false, None) => {
            return Err(AppError::field(
                "disciplineId",
                format!("{} performances require a discipline", sport.name),
            ))
        }
        (true, None) => MeasurementUnit::Unitless,
        (false, Some(discipline_id)) => {
            let discipline = DisciplineRepository::new(db)
                .find_by_id(discipline_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Discipline not found".to_string()))?;
            if discipline.sport_id != sport.id {
                return Err(AppError::BadRequest(format!(
                    "Discipline {} does not belong to {}",
                    discipline.code, sport.name
                )));
            }
            discipline.measurement_unit()
        }
    };

    validate_sport_metrics(sport.name, &dto.metrics)?;

    let duplicate = PerformanceRepository::new(db)
        .find_duplicate(athlete.id, event.id, dto.discipline_id)
        .await?;
    if duplicate.is_some() {
        return Err(AppError::Conflict(format!(
            "Athlete {} already has a performance for event {}",
            athlete.code, event.code
        )));
    }

    let param = CreatePerformanceParam {
        athlete_id: athlete.id,
        event_id: event.id,
        discipline_id: dto.discipline_id,
        season_id: event.season_id,
        date: dto.date.unwrap_or_else(Utc::now),
        notes: dto.notes,
        metrics: dto.metrics,
        is_personal_best: false,
        is_season_best: false,
    };

    Ok((param, unit))
}

/// Inserts a row, deciding its best flags against the existing scope and taking the
/// flags from the previous holders when it wins
///
/// Rows without a discipline (team sports) are stored with both flags unset.
async fn insert_with_bests<C: ConnectionTrait>(
    db: &C,
    mut param: CreatePerformanceParam,
    unit: MeasurementUnit,
) -> Result<Performance, AppError> {
    let repo = PerformanceRepository::new(db);
    let Some(discipline_id) = param.discipline_id else {
        return repo.create(param).await;
    };

    let personal = BestScope {
        athlete_id: param.athlete_id,
        discipline_id: Some(discipline_id),
        season_id: None,
    };
    let season = BestScope {
        season_id: Some(param.season_id),
        ..personal
    };

    let history = repo.get_in_scope(personal, None).await?;
    param.is_personal_best = is_new_best(unit, &param.metrics, history.iter().map(|p| &p.metrics));
    param.is_season_best = is_new_best(
        unit,
        &param.metrics,
        history
            .iter()
            .filter(|p| p.season_id == param.season_id)
            .map(|p| &p.metrics),
    );

    let performance = repo.create(param).await?;

    if performance.is_personal_best {
        repo.clear_personal_best(personal, Some(performance.id))
            .await?;
    }
    if performance.is_season_best {
        repo.clear_season_best(season, Some(performance.id)).await?;
    }

    Ok(performance)
}

/// Re-evaluates an edited row against the rest of its scopes
///
/// A row that now beats every other row takes the flag. A row that held a flag and no
/// longer wins hands it back through a full replay of the scope.
async fn reevaluate_bests<C: ConnectionTrait>(
    db: &C,
    row: &Performance,
    unit: MeasurementUnit,
) -> Result<(), AppError> {
    let Some(discipline_id) = row.discipline_id else {
        return Ok(());
    };

    let repo = PerformanceRepository::new(db);
    let personal = BestScope {
        athlete_id: row.athlete_id,
        discipline_id: Some(discipline_id),
        season_id: None,
    };
    let season = BestScope {
        season_id: Some(row.season_id),
        ..personal
    };

    let others = repo.get_in_scope(personal, Some(row.id)).await?;
    if is_new_best(unit, &row.metrics, others.iter().map(|p| &p.metrics)) {
        repo.set_personal_best(row.id, true).await?;
        repo.clear_personal_best(personal, Some(row.id)).await?;
    } else if row.is_personal_best {
        let rows = repo.get_in_scope(personal, None).await?;
        let holder = replay_best(unit, rows.iter().map(|p| (p.id, &p.metrics)));
        repo.clear_personal_best(personal, holder).await?;
        if let Some(id) = holder {
            repo.set_personal_best(id, true).await?;
        }
    }

    let others: Vec<_> = others
        .iter()
        .filter(|p| p.season_id == row.season_id)
        .collect();
    if is_new_best(unit, &row.metrics, others.iter().map(|p| &p.metrics)) {
        repo.set_season_best(row.id, true).await?;
        repo.clear_season_best(season, Some(row.id)).await?;
    } else if row.is_season_best {
        let rows = repo.get_in_scope(season, None).await?;
        let holder = replay_best(unit, rows.iter().map(|p| (p.id, &p.metrics)));
        repo.clear_season_best(season, holder).await?;
        if let Some(id) = holder {
            repo.set_season_best(id, true).await?;
        }
    }

    Ok(())
}

async fn find_event<C: ConnectionTrait>(db: &C, id: i32) -> Result<Event, AppError> {
    EventRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}

async fn find_sport<C: ConnectionTrait>(db: &C, id: i32) -> Result<Sport, AppError> {
    SportRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Sport not found".to_string()))
}

/// Ties an error from a bulk row to its position in the batch.
fn at_index(err: AppError, index: usize) -> AppError {
    match err {
        AppError::Validation { message, errors } => AppError::Validation {
            message: format!("performances[{}]: {}", index, message),
            errors: errors
                .into_iter()
                .map(|(field, msg)| (format!("performances[{}].{}", index, field), msg))
                .collect(),
        },
        AppError::NotFound(msg) => AppError::NotFound(format!("performances[{}]: {}", index, msg)),
        AppError::BadRequest(msg) => {
            AppError::BadRequest(format!("performances[{}]: {}", index, msg))
        }
        AppError::Conflict(msg) => AppError::Conflict(format!("performances[{}]: {}", index, msg)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_errors_name_the_row() {
        let err = at_index(AppError::field("punchesLanded", "too many"), 2);

        match err {
            AppError::Validation { errors, message } => {
                assert!(errors.contains_key("performances[2].punchesLanded"));
                assert!(message.starts_with("performances[2]"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
