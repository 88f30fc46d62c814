use super::*;

/// Tests improving a row past the current personal best.
///
/// Verifies that editing the 12.5 row down to 11.8 moves both flags to it from the
/// 12.1 row.
///
/// Expected: Ok with flags [false, true]
#[tokio::test]
async fn improved_row_takes_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let created = record_series(db, &fixture, vec![time(12.1), time(12.5)]).await?;

    let updated = PerformanceService::new(db)
        .update(
            created[1].id,
            UpdatePerformanceDto {
                metrics: time(11.8),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.metrics.time, Some(11.8));
    assert!(updated.is_personal_best);

    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![false, true]);
    assert_eq!(season_best_flags(&rows), vec![false, true]);

    Ok(())
}

/// Tests slowing down the personal-best row.
///
/// Verifies that editing the 11.9 holder to 12.4 hands the flag to the 12.1 row
/// recorded after it.
///
/// Expected: Ok with flags [false, true]
#[tokio::test]
async fn worsened_holder_gives_up_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let created = record_series(db, &fixture, vec![time(11.9), time(12.1)]).await?;

    PerformanceService::new(db)
        .update(
            created[0].id,
            UpdatePerformanceDto {
                metrics: time(12.4),
                ..Default::default()
            },
        )
        .await?;

    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![false, true]);

    Ok(())
}

/// Tests editing a row of a finished event.
///
/// Verifies that metric changes are rejected while a notes-only change is applied.
///
/// Expected: Err(BadRequest) for metrics, Ok for notes
#[tokio::test]
async fn finished_event_only_accepts_notes() -> Result<(), AppError> {
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
    let rejected = service
        .update(
            row.id,
            UpdatePerformanceDto {
                metrics: time(11.0),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(rejected, Err(AppError::BadRequest(_))));

    let updated = service
        .update(
            row.id,
            UpdatePerformanceDto {
                notes: Some("Wind assisted".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.notes.as_deref(), Some("Wind assisted"));
    assert_eq!(updated.metrics.time, Some(12.0));

    Ok(())
}
