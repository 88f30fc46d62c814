use super::*;

/// Tests deleting a discipline with recorded performances.
///
/// Expected: Err(Conflict) and the discipline is kept
#[tokio::test]
async fn rejects_discipline_with_performances() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;
    factory::performance::PerformanceFactory::new(db, athlete.id, event.id, season.id)
        .discipline(Some(discipline.id))
        .time(Some(10.5))
        .build()
        .await?;

    let service = DisciplineService::new(db);
    let result = service.delete(discipline.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(discipline.id).await.is_ok());

    Ok(())
}

/// Tests deleting a discipline athletes are registered for.
///
/// Verifies that the registrations are removed along with the discipline.
///
/// Expected: Ok with the athlete no longer linked
#[tokio::test]
async fn removes_registrations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;

    DisciplineService::new(db).delete(discipline.id).await?;

    let athlete = crate::server::service::athlete::AthleteService::new(db)
        .get_by_id(athlete.id)
        .await?;
    assert!(athlete.disciplines.is_empty());

    Ok(())
}
