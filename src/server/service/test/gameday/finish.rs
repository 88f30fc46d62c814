use super::*;

/// Tests finishing the current gameday.
///
/// Verifies that the gameday is marked finished and previous, loses the current flag,
/// and that the season's former previous gameday is cleared.
///
/// Expected: Ok with the finished gameday as the only previous one
#[tokio::test]
async fn finished_gameday_becomes_previous() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;
    let earlier = factory::gameday::GamedayFactory::new(db, season.id)
        .finished(true)
        .previous(true)
        .build()
        .await?;
    let current = factory::gameday::GamedayFactory::new(db, season.id)
        .current(true)
        .build()
        .await?;

    let service = GamedayService::new(db);
    let finished = service.finish(current.id).await?;

    assert!(finished.finished);
    assert!(finished.is_previous);
    assert!(!finished.is_current);
    assert!(!service.get_by_id(earlier.id).await?.is_previous);

    let slot = service
        .get_slot(GamedaySlot::Previous, Some(season.id))
        .await?;
    assert_eq!(slot.id, current.id);

    Ok(())
}

/// Tests the current slot when no gameday holds it.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_current_gameday_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;
    factory::create_gameday(db, season.id).await?;

    let result = GamedayService::new(db)
        .get_slot(GamedaySlot::Current, Some(season.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
