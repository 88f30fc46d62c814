//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique codes and names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete event hierarchy for the `ATHLETICS` individual sport.
///
/// This is a convenience method that creates:
/// 1. Sport (ATHLETICS, individual)
/// 2. Season
/// 3. Gameday
/// 4. Event (LIVE)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((sport, season, gameday, event))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::sport::Model,
        entity::season::Model,
        entity::gameday::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let sport = crate::factory::sport::create_individual_sport(db).await?;
    let (season, gameday, event) = create_event_for_sport(db, sport.id).await?;

    Ok((sport, season, gameday, event))
}

/// Creates a season, gameday and LIVE event for an existing sport.
///
/// # Arguments
/// - `db` - Database connection
/// - `sport_id` - Sport the event is held for
///
/// # Returns
/// - `Ok((season, gameday, event))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_for_sport(
    db: &DatabaseConnection,
    sport_id: i32,
) -> Result<
    (
        entity::season::Model,
        entity::gameday::Model,
        entity::event::Model,
    ),
    DbErr,
> {
    let season = crate::factory::season::create_season(db).await?;
    let gameday = crate::factory::gameday::create_gameday(db, season.id).await?;
    let event = crate::factory::event::create_event(db, sport_id, season.id, gameday.id).await?;

    Ok((season, gameday, event))
}

/// Creates an individual-sport athlete registered for one discipline.
///
/// # Arguments
/// - `db` - Database connection
/// - `sport_id` - Individual sport the discipline belongs to
/// - `unit` - Measurement unit of the created discipline
///
/// # Returns
/// - `Ok((athlete, discipline))` - The athlete and the discipline it is linked to
/// - `Err(DbErr)` - Database error during creation
pub async fn create_athlete_in_discipline(
    db: &DatabaseConnection,
    sport_id: i32,
    unit: Option<&str>,
) -> Result<(entity::athlete::Model, entity::discipline::Model), DbErr> {
    let discipline = crate::factory::discipline::DisciplineFactory::new(db, sport_id)
        .unit(unit)
        .build()
        .await?;
    let athlete = crate::factory::athlete::create_athlete(db).await?;
    crate::factory::athlete_discipline::create_athlete_discipline(
        db,
        athlete.id,
        discipline.id,
        None,
    )
    .await?;

    Ok((athlete, discipline))
}
