use super::*;

/// Tests deleting the personal-best row.
///
/// Verifies that after recording 12.1, 11.9 and 12.5 and deleting the 11.9 row, both
/// flags move to the 12.1 row, the best of what remains.
///
/// Expected: Ok with flags [true, false] on the remaining rows
#[tokio::test]
async fn hands_best_to_next_fastest() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let created = record_series(db, &fixture, vec![time(12.1), time(11.9), time(12.5)]).await?;

    let service = PerformanceService::new(db);
    service.delete(created[1].id).await?;

    let remaining = reload(db, &[created[0].clone(), created[2].clone()]).await?;
    assert_eq!(personal_best_flags(&remaining), vec![true, false]);
    assert_eq!(season_best_flags(&remaining), vec![true, false]);
    assert!(matches!(
        service.get_by_id(created[1].id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting the only row of a scope.
///
/// Expected: Ok with no personal bests left for the athlete
#[tokio::test]
async fn deleting_last_row_leaves_no_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let created = record_series(db, &fixture, vec![time(12.0)]).await?;

    let service = PerformanceService::new(db);
    service.delete(created[0].id).await?;

    let bests = service
        .get_personal_bests(fixture.athlete.id, None)
        .await?;
    assert!(bests.is_empty());

    Ok(())
}

/// Tests deleting a row of a finished event.
///
/// Expected: Err(BadRequest) and the row is kept
#[tokio::test]
async fn rejects_finished_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let gameday = factory::create_gameday(db, fixture.season.id).await?;
    let event =
        factory::event::EventFactory::new(db, fixture.sport.id, fixture.season.id, gameday.id)
            .status("FINISHED")
            .build()
            .await?;
    let row = factory::performance::PerformanceFactory::new(
        db,
        fixture.athlete.id,
        event.id,
        fixture.season.id,
    )
    .discipline(Some(fixture.discipline.id))
    .time(Some(12.0))
    .build()
    .await?;

    let service = PerformanceService::new(db);
    let result = service.delete(row.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_by_id(row.id).await.is_ok());

    Ok(())
}
