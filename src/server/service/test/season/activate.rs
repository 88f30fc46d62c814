use super::*;

/// Tests that activating a season deactivates the previously active one.
///
/// Expected: Ok with only the second season active
#[tokio::test]
async fn keeps_a_single_active_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::season::SeasonFactory::new(db)
        .active(true)
        .build()
        .await?;
    let second = factory::create_season(db).await?;

    let service = SeasonService::new(db);
    let activated = service.activate(second.id).await?;

    assert!(activated.is_active);
    assert!(!service.get_by_id(first.id).await?.is_active);
    assert_eq!(service.get_active().await?.id, second.id);

    Ok(())
}

/// Tests activating a season that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeasonService::new(db).activate(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
