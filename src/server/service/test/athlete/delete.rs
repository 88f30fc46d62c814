use super::*;

/// Tests deleting an athlete with recorded performances.
///
/// Verifies that the athlete is deactivated instead of removed.
///
/// Expected: Ok with `soft_deleted` and the athlete inactive
#[tokio::test]
async fn deactivates_athlete_with_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, season, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let athlete = factory::create_athlete(db).await?;
    factory::create_performance(db, athlete.id, event.id, season.id).await?;

    let service = AthleteService::new(db);
    let result = service.delete(athlete.id).await?;

    assert!(result.soft_deleted);
    assert!(!service.get_by_id(athlete.id).await?.is_active);

    Ok(())
}

/// Tests deleting an athlete without performances.
///
/// Expected: Ok with a hard delete
#[tokio::test]
async fn removes_athlete_without_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    let (athlete, _) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;

    let service = AthleteService::new(db);
    let result = service.delete(athlete.id).await?;

    assert!(!result.soft_deleted);
    assert!(matches!(
        service.get_by_id(athlete.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
