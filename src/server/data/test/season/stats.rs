use super::*;

/// Tests the season counters.
///
/// Verifies that gamedays, events, finished events and performances of the season are
/// counted while rows of another season are not.
///
/// Expected: Ok with 2 gamedays, 2 events, 1 finished event and 1 performance
#[tokio::test]
async fn counts_season_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, gameday, live) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let second_gameday = factory::create_gameday(db, season.id).await?;
    factory::event::EventFactory::new(db, sport.id, season.id, second_gameday.id)
        .status("FINISHED")
        .build()
        .await?;
    let athlete = factory::create_athlete(db).await?;
    factory::create_performance(db, athlete.id, live.id, season.id).await?;

    let other = factory::create_season(db).await?;
    factory::create_event(db, sport.id, other.id, gameday.id).await?;

    let stats = SeasonRepository::new(db).stats(season.id).await?;

    assert_eq!(stats.season_id, season.id);
    assert_eq!(stats.gamedays, 2);
    assert_eq!(stats.events, 2);
    assert_eq!(stats.finished_events, 1);
    assert_eq!(stats.performances, 1);

    Ok(())
}
