use super::*;

/// Tests creating an active season while another one is active.
///
/// Verifies that the new season takes over the active flag and the name is trimmed.
///
/// Expected: Ok with exactly one active season
#[tokio::test]
async fn active_season_replaces_previous() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_season_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let previous = factory::season::SeasonFactory::new(db)
        .active(true)
        .build()
        .await?;

    let service = SeasonService::new(db);
    let created = service
        .create(CreateSeasonDto {
            name: "  Outdoor 2026  ".to_string(),
            season_type: SeasonType::Outdoor,
            start_year: 2026,
            end_year: 2026,
            is_active: true,
        })
        .await?;

    assert_eq!(created.name, "Outdoor 2026");
    assert!(!service.get_by_id(previous.id).await?.is_active);

    let active: Vec<_> = service
        .get_all()
        .await?
        .into_iter()
        .filter(|season| season.is_active)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, created.id);

    Ok(())
}
