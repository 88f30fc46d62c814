use super::*;

/// Tests that deleting an event recomputes the bests its rows held.
///
/// Verifies that when the event holding an athlete's 11.9 personal best is deleted,
/// the 12.1 row from another event becomes the personal and season best.
///
/// Expected: Ok with the remaining row flagged
#[tokio::test]
async fn recomputes_bests_of_removed_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;
    let (season, gameday, kept_event) = factory::helpers::create_event_for_sport(db, sport.id).await?;
    let deleted_event = factory::create_event(db, sport.id, season.id, gameday.id).await?;

    let performances = PerformanceService::new(db);
    let row = |event_id: i32, seconds: f64| CreatePerformanceDto {
        athlete_id: athlete.id,
        event_id,
        discipline_id: Some(discipline.id),
        date: None,
        notes: None,
        metrics: PerformanceMetricsDto {
            time: Some(seconds),
            ..Default::default()
        },
    };
    let kept = performances.create(row(kept_event.id, 12.1)).await?;
    let removed = performances.create(row(deleted_event.id, 11.9)).await?;
    assert!(removed.is_personal_best);

    let events = EventService::new(db);
    events
        .update_status(deleted_event.id, EventStatus::Finished)
        .await?;
    events.delete(deleted_event.id).await?;

    let kept = performances.get_by_id(kept.id).await?;
    assert!(kept.is_personal_best);
    assert!(kept.is_season_best);
    assert!(matches!(
        performances.get_by_id(removed.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a live event.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_live_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let result = EventService::new(db).delete(event.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
