use super::*;

fn gameday(season_id: i32, game_number: i32, is_next: bool) -> CreateGamedayParam {
    CreateGamedayParam {
        name: format!("Matchday {}", game_number),
        season_id,
        game_number: Some(game_number),
        scheduled_date: None,
        is_current: false,
        is_next,
    }
}

/// Tests picking the next gameday when several carry the flag.
///
/// Expected: Ok with the lowest game number
#[tokio::test]
async fn next_slot_prefers_lowest_game_number() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;

    let repo = GamedayRepository::new(db);
    repo.create(gameday(season.id, 4, true)).await?;
    let third = repo.create(gameday(season.id, 3, true)).await?;
    repo.create(gameday(season.id, 2, false)).await?;

    let next = repo.find_slot(GamedaySlot::Next, Some(season.id)).await?;

    assert_eq!(next.map(|g| g.id), Some(third.id));

    Ok(())
}

/// Tests restricting a slot lookup to one season.
///
/// Expected: Ok(None) for a season without a current gameday
#[tokio::test]
async fn slot_lookup_respects_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;
    let empty_season = factory::create_season(db).await?;
    let current = factory::gameday::GamedayFactory::new(db, season.id)
        .current(true)
        .build()
        .await?;

    let repo = GamedayRepository::new(db);

    let any = repo.find_slot(GamedaySlot::Current, None).await?;
    assert_eq!(any.map(|g| g.id), Some(current.id));

    let scoped = repo
        .find_slot(GamedaySlot::Current, Some(empty_season.id))
        .await?;
    assert!(scoped.is_none());

    Ok(())
}
