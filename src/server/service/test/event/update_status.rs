use super::*;

/// Tests starting a scheduled event.
///
/// Expected: Ok with status LIVE
#[tokio::test]
async fn scheduled_event_goes_live() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    let season = factory::create_season(db).await?;
    let gameday = factory::create_gameday(db, season.id).await?;
    let event = factory::event::EventFactory::new(db, sport.id, season.id, gameday.id)
        .status("SCHEDULED")
        .build()
        .await?;

    let updated = EventService::new(db)
        .update_status(event.id, EventStatus::Live)
        .await?;

    assert_eq!(updated.status, EventStatus::Live);

    Ok(())
}

/// Tests a transition the lifecycle does not allow.
///
/// Verifies that a finished event cannot be moved back to SCHEDULED and keeps its
/// status.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_finished_to_scheduled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    let season = factory::create_season(db).await?;
    let gameday = factory::create_gameday(db, season.id).await?;
    let event = factory::event::EventFactory::new(db, sport.id, season.id, gameday.id)
        .status("FINISHED")
        .build()
        .await?;

    let service = EventService::new(db);
    let result = service
        .update_status(event.id, EventStatus::Scheduled)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        service.get_by_id(event.id).await?.status,
        EventStatus::Finished
    );

    Ok(())
}

/// Tests requesting the status an event already has.
///
/// Expected: Ok with the status unchanged
#[tokio::test]
async fn same_status_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, event) = factory::helpers::create_event_with_dependencies(db).await?;

    let updated = EventService::new(db)
        .update_status(event.id, EventStatus::Live)
        .await?;

    assert_eq!(updated.status, EventStatus::Live);

    Ok(())
}
