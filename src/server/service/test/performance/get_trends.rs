use super::*;

/// Tests the trend of steadily falling times.
///
/// Expected: Ok with an improving `time` trend over four points
#[tokio::test]
async fn falling_times_are_improving() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    record_series(
        db,
        &fixture,
        vec![time(12.5), time(12.3), time(12.0), time(11.8)],
    )
    .await?;

    let trend = PerformanceService::new(db)
        .get_trends(fixture.athlete.id, fixture.discipline.id, Timeframe::All)
        .await?;

    assert_eq!(trend.trend, Trend::Improving);
    assert_eq!(trend.metric.as_deref(), Some("time"));
    assert_eq!(trend.points.len(), 4);
    assert!(trend.slope.is_some_and(|s| s < 0.0));
    assert!(trend.average_improvement.is_some());

    Ok(())
}

/// Tests the trend of a single result.
///
/// Expected: Ok with insufficient data
#[tokio::test]
async fn single_result_is_insufficient() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    record_series(db, &fixture, vec![time(12.5)]).await?;

    let trend = PerformanceService::new(db)
        .get_trends(fixture.athlete.id, fixture.discipline.id, Timeframe::All)
        .await?;

    assert_eq!(trend.trend, Trend::InsufficientData);
    assert_eq!(trend.average_improvement, None);

    Ok(())
}

/// Tests the season timeframe without an active season.
///
/// Verifies that rows of the season holding the athlete's latest result are used when
/// no season is active.
///
/// Expected: Ok with only the latest season's points
#[tokio::test]
async fn season_timeframe_falls_back_to_latest_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    record_series(db, &fixture, vec![time(12.5), time(12.3)]).await?;

    let later = factory::season::SeasonFactory::new(db)
        .years(2026, 2027)
        .build()
        .await?;
    let event = live_event(db, fixture.sport.id, later.id).await?;
    PerformanceService::new(db)
        .create(dto(
            fixture.athlete.id,
            event.id,
            Some(fixture.discipline.id),
            day(20),
            time(12.9),
        ))
        .await?;

    let trend = PerformanceService::new(db)
        .get_trends(fixture.athlete.id, fixture.discipline.id, Timeframe::Season)
        .await?;

    assert_eq!(trend.points.len(), 1);
    assert_eq!(trend.points[0].value, 12.9);

    Ok(())
}
