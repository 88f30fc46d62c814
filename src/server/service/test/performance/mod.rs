use crate::{
    model::performance::{
        BulkPerformanceDto, CreatePerformanceDto, PerformanceMetricsDto, Timeframe, Trend,
        UpdatePerformanceDto,
    },
    server::{
        error::AppError,
        model::performance::{Performance, PerformanceFilter},
        service::performance::PerformanceService,
    },
};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_bulk;
mod delete;
mod get_top;
mod get_trends;
mod update;

/// An individual sport with one season and an athlete registered for one discipline.
struct Fixture {
    sport: entity::sport::Model,
    season: entity::season::Model,
    athlete: entity::athlete::Model,
    discipline: entity::discipline::Model,
}

/// Creates the athletics fixture with a discipline measured in `unit`.
async fn athletics(db: &DatabaseConnection, unit: Option<&str>) -> Result<Fixture, DbErr> {
    let sport = factory::create_individual_sport(db).await?;
    let season = factory::create_season(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, unit).await?;

    Ok(Fixture {
        sport,
        season,
        athlete,
        discipline,
    })
}

/// Creates a LIVE event of the sport on a fresh gameday of the season.
async fn live_event(
    db: &DatabaseConnection,
    sport_id: i32,
    season_id: i32,
) -> Result<entity::event::Model, DbErr> {
    let gameday = factory::create_gameday(db, season_id).await?;

    factory::create_event(db, sport_id, season_id, gameday.id).await
}

/// Noon on the given day of March 2025.
fn day(n: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, n, 12, 0, 0).unwrap()
}

fn time(seconds: f64) -> PerformanceMetricsDto {
    PerformanceMetricsDto {
        time: Some(seconds),
        ..Default::default()
    }
}

fn distance(meters: f64) -> PerformanceMetricsDto {
    PerformanceMetricsDto {
        distance: Some(meters),
        ..Default::default()
    }
}

fn dto(
    athlete_id: i32,
    event_id: i32,
    discipline_id: Option<i32>,
    date: DateTime<Utc>,
    metrics: PerformanceMetricsDto,
) -> CreatePerformanceDto {
    CreatePerformanceDto {
        athlete_id,
        event_id,
        discipline_id,
        date: Some(date),
        notes: None,
        metrics,
    }
}

/// Records one row per metric for the fixture's athlete, each at its own event on
/// consecutive days.
async fn record_series(
    db: &DatabaseConnection,
    fixture: &Fixture,
    series: Vec<PerformanceMetricsDto>,
) -> Result<Vec<Performance>, AppError> {
    let service = PerformanceService::new(db);
    let mut created = Vec::new();

    for (i, metrics) in series.into_iter().enumerate() {
        let event = live_event(db, fixture.sport.id, fixture.season.id).await?;
        let performance = service
            .create(dto(
                fixture.athlete.id,
                event.id,
                Some(fixture.discipline.id),
                day(i as u32 + 1),
                metrics,
            ))
            .await?;
        created.push(performance);
    }

    Ok(created)
}

/// Reloads rows to observe flags changed by later writes.
async fn reload(db: &DatabaseConnection, rows: &[Performance]) -> Result<Vec<Performance>, AppError> {
    let service = PerformanceService::new(db);
    let mut fresh = Vec::with_capacity(rows.len());
    for row in rows {
        fresh.push(service.get_by_id(row.id).await?);
    }

    Ok(fresh)
}

fn personal_best_flags(rows: &[Performance]) -> Vec<bool> {
    rows.iter().map(|p| p.is_personal_best).collect()
}

fn season_best_flags(rows: &[Performance]) -> Vec<bool> {
    rows.iter().map(|p| p.is_season_best).collect()
}
