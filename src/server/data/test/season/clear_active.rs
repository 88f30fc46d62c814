use super::*;

/// Tests clearing the active flag before activating another season.
///
/// Expected: Ok with no active season after clearing and the new one after setting
#[tokio::test]
async fn clears_then_sets_active_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::season::SeasonFactory::new(db)
        .active(true)
        .build()
        .await?;
    let next = factory::create_season(db).await?;

    let repo = SeasonRepository::new(db);
    repo.clear_active().await?;
    assert!(repo.find_active().await?.is_none());

    repo.set_active_flag(next.id, true).await?;
    assert_eq!(repo.find_active().await?.map(|s| s.id), Some(next.id));

    Ok(())
}
