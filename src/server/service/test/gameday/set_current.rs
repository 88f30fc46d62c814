use super::*;

/// Tests moving the current flag within a season.
///
/// Verifies that the target gameday becomes current and loses its next flag, the old
/// current gameday is cleared, and a gameday of another season keeps its flag.
///
/// Expected: Ok with one current gameday per season
#[tokio::test]
async fn moves_current_flag_within_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;
    let other_season = factory::create_season(db).await?;
    let old = factory::gameday::GamedayFactory::new(db, season.id)
        .current(true)
        .build()
        .await?;
    let upcoming = factory::gameday::GamedayFactory::new(db, season.id)
        .next(true)
        .build()
        .await?;
    let elsewhere = factory::gameday::GamedayFactory::new(db, other_season.id)
        .current(true)
        .build()
        .await?;

    let service = GamedayService::new(db);
    let current = service.set_current(upcoming.id).await?;

    assert!(current.is_current);
    assert!(!current.is_next);
    assert!(!service.get_by_id(old.id).await?.is_current);
    assert!(service.get_by_id(elsewhere.id).await?.is_current);

    let slot = service
        .get_slot(GamedaySlot::Current, Some(season.id))
        .await?;
    assert_eq!(slot.id, upcoming.id);

    Ok(())
}
