use super::*;

/// Tests that only the fastest time holds the personal best.
///
/// Verifies that recording 12.1, 11.9 and 12.5 seconds in order leaves the personal
/// and season best on the 11.9 row only, and that the slower later row never takes it.
///
/// Expected: Ok with flags [false, true, false]
#[tokio::test]
async fn only_fastest_time_is_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;

    let created = record_series(db, &fixture, vec![time(12.1), time(11.9), time(12.5)]).await?;

    assert!(created[0].is_personal_best);
    assert!(created[1].is_personal_best);
    assert!(!created[2].is_personal_best);

    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![false, true, false]);
    assert_eq!(season_best_flags(&rows), vec![false, true, false]);

    Ok(())
}

/// Tests that the longest distance holds the personal best.
///
/// Verifies that for a discipline measured in meters, higher is better: 7.50, 7.48
/// and 7.60 leave the flag on the 7.60 row.
///
/// Expected: Ok with flags [false, false, true]
#[tokio::test]
async fn longest_distance_is_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("meters")).await?;

    let created =
        record_series(db, &fixture, vec![distance(7.50), distance(7.48), distance(7.60)]).await?;

    assert!(!created[1].is_personal_best);

    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![false, false, true]);

    Ok(())
}

/// Tests that equalling the personal best does not take the flag.
///
/// Verifies that a second 11.9 keeps the flag on the first row that ran it.
///
/// Expected: Ok with flags [true, false]
#[tokio::test]
async fn tie_keeps_existing_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;

    let created = record_series(db, &fixture, vec![time(11.9), time(11.9)]).await?;

    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![true, false]);

    Ok(())
}

/// Tests that a row without a comparable metric is never a best.
///
/// Verifies that a football row with only goals scored is stored without either
/// best flag.
///
/// Expected: Ok with both flags false
#[tokio::test]
async fn row_without_comparable_metric_is_never_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sport = factory::sport::SportFactory::new(db)
        .name("FOOTBALL")
        .team_sport(true)
        .build()
        .await?;
    let season = factory::create_season(db).await?;
    let event = live_event(db, sport.id, season.id).await?;
    let athlete = factory::create_athlete(db).await?;

    let performance = PerformanceService::new(db)
        .create(dto(
            athlete.id,
            event.id,
            None,
            day(1),
            PerformanceMetricsDto {
                goals_scored: Some(2),
                ..Default::default()
            },
        ))
        .await?;

    assert!(!performance.is_personal_best);
    assert!(!performance.is_season_best);

    Ok(())
}

/// Tests that team-sport rows never carry best flags.
///
/// Verifies that two basketball rows without a discipline, scoring 20 and then 30
/// points at separate events, are both stored with neither flag even though the
/// second outscores the first, and that raising the first row's points keeps it so.
///
/// Expected: Ok with both flags false on every row
#[tokio::test]
async fn team_sport_rows_are_never_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sport = factory::sport::SportFactory::new(db)
        .name("BASKETBALL")
        .team_sport(true)
        .build()
        .await?;
    let season = factory::create_season(db).await?;
    let athlete = factory::create_athlete(db).await?;
    let service = PerformanceService::new(db);

    let mut created = Vec::new();
    for (i, points) in [20.0, 30.0].into_iter().enumerate() {
        let event = live_event(db, sport.id, season.id).await?;
        let performance = service
            .create(dto(
                athlete.id,
                event.id,
                None,
                day(i as u32 + 1),
                PerformanceMetricsDto {
                    points: Some(points),
                    ..Default::default()
                },
            ))
            .await?;
        created.push(performance);
    }

    service
        .update(
            created[0].id,
            UpdatePerformanceDto {
                metrics: PerformanceMetricsDto {
                    points: Some(45.0),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await?;

    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![false, false]);
    assert_eq!(season_best_flags(&rows), vec![false, false]);

    Ok(())
}

/// Tests that a season best can exist without being a personal best.
///
/// Verifies that 11.0 in one season and 11.5 in the next leave the personal best on
/// the 11.0 row while the 11.5 row is the best of its own season.
///
/// Expected: Ok with the second row season best only
#[tokio::test]
async fn season_best_without_personal_best() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let next_season = factory::season::SeasonFactory::new(db)
        .years(2026, 2027)
        .build()
        .await?;

    let service = PerformanceService::new(db);
    let first_event = live_event(db, fixture.sport.id, fixture.season.id).await?;
    let first = service
        .create(dto(
            fixture.athlete.id,
            first_event.id,
            Some(fixture.discipline.id),
            day(1),
            time(11.0),
        ))
        .await?;
    let second_event = live_event(db, fixture.sport.id, next_season.id).await?;
    let second = service
        .create(dto(
            fixture.athlete.id,
            second_event.id,
            Some(fixture.discipline.id),
            day(2),
            time(11.5),
        ))
        .await?;

    assert_eq!(second.season_id, next_season.id);
    assert!(!second.is_personal_best);
    assert!(second.is_season_best);

    let first = service.get_by_id(first.id).await?;
    assert!(first.is_personal_best);
    assert!(first.is_season_best);

    Ok(())
}

/// Tests the boxing punch rule on recording.
///
/// Verifies that landing 50 of 40 thrown punches is rejected with a field error while
/// 30 of 40 is stored.
///
/// Expected: Err(Validation) then Ok
#[tokio::test]
async fn boxing_rejects_more_punches_landed_than_thrown() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sport = factory::sport::SportFactory::new(db)
        .name("BOXING")
        .build()
        .await?;
    let season = factory::create_season(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, None).await?;
    let event = live_event(db, sport.id, season.id).await?;
    let punches = |landed, thrown| PerformanceMetricsDto {
        punches_landed: Some(landed),
        punches_thrown: Some(thrown),
        ..Default::default()
    };

    let service = PerformanceService::new(db);
    let rejected = service
        .create(dto(athlete.id, event.id, Some(discipline.id), day(1), punches(50, 40)))
        .await;

    match rejected {
        Err(AppError::Validation { errors, .. }) => {
            assert!(errors.contains_key("punchesLanded"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let stored = service
        .create(dto(athlete.id, event.id, Some(discipline.id), day(1), punches(30, 40)))
        .await?;
    assert_eq!(stored.metrics.punches_landed, Some(30));

    Ok(())
}

/// Tests the wrestling result rule on recording.
///
/// Verifies that a bout with one win and one loss is rejected while a win with zero
/// losses is stored.
///
/// Expected: Err(Validation) then Ok
#[tokio::test]
async fn wrestling_requires_a_single_outcome() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let sport = factory::sport::SportFactory::new(db)
        .name("WRESTLING")
        .build()
        .await?;
    let season = factory::create_season(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, None).await?;
    let event = live_event(db, sport.id, season.id).await?;
    let bout = |wins, losses| PerformanceMetricsDto {
        wins: Some(wins),
        losses: Some(losses),
        ..Default::default()
    };

    let service = PerformanceService::new(db);
    let rejected = service
        .create(dto(athlete.id, event.id, Some(discipline.id), day(1), bout(1, 1)))
        .await;
    assert!(matches!(rejected, Err(AppError::Validation { .. })));

    let stored = service
        .create(dto(athlete.id, event.id, Some(discipline.id), day(1), bout(1, 0)))
        .await?;
    assert_eq!(stored.metrics.wins, Some(1));

    Ok(())
}

/// Tests recording a second row for the same athlete, event and discipline.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_performance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let event = live_event(db, fixture.sport.id, fixture.season.id).await?;

    let service = PerformanceService::new(db);
    let row = || {
        dto(
            fixture.athlete.id,
            event.id,
            Some(fixture.discipline.id),
            day(1),
            time(12.0),
        )
    };
    service.create(row()).await?;
    let result = service.create(row()).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests recording for an inactive athlete.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_inactive_athlete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let event = live_event(db, fixture.sport.id, fixture.season.id).await?;
    let retired = factory::athlete::AthleteFactory::new(db)
        .active(false)
        .build()
        .await?;

    let result = PerformanceService::new(db)
        .create(dto(
            retired.id,
            event.id,
            Some(fixture.discipline.id),
            day(1),
            time(12.0),
        ))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests recording for an event that has not started.
///
/// Verifies that SCHEDULED events do not accept performances.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_scheduled_event() -> Result<(), AppError> {
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
            .status("SCHEDULED")
            .build()
            .await?;

    let result = PerformanceService::new(db)
        .create(dto(
            fixture.athlete.id,
            event.id,
            Some(fixture.discipline.id),
            day(1),
            time(12.0),
        ))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that an individual sport requires a discipline.
///
/// Expected: Err(Validation) on `disciplineId`
#[tokio::test]
async fn individual_sport_requires_discipline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let event = live_event(db, fixture.sport.id, fixture.season.id).await?;

    let result = PerformanceService::new(db)
        .create(dto(fixture.athlete.id, event.id, None, day(1), time(12.0)))
        .await;

    match result {
        Err(AppError::Validation { errors, .. }) => assert!(errors.contains_key("disciplineId")),
        other => panic!("expected validation error, got {:?}", other),
    }

    Ok(())
}
