use super::*;

/// Tests deleting a season that still has events.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_season_with_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, season, _, _) = factory::helpers::create_event_with_dependencies(db).await?;

    let result = SeasonService::new(db).delete(season.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests deleting an empty season.
///
/// Expected: Ok and the season is gone
#[tokio::test]
async fn deletes_empty_season() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let season = factory::create_season(db).await?;

    let service = SeasonService::new(db);
    service.delete(season.id).await?;

    assert!(matches!(
        service.get_by_id(season.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
