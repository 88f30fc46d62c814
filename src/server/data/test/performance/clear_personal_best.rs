use super::*;

/// Tests clearing personal-best flags in a scope while keeping one row.
///
/// Verifies that every flagged row of the athlete's discipline is cleared except the
/// kept row, and that another athlete's flag is untouched.
///
/// Expected: Ok with only the kept row and the other athlete's row flagged
#[tokio::test]
async fn clears_all_but_kept_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;
    let rival = factory::create_athlete(db).await?;

    let flagged = |athlete_id: i32| {
        factory::performance::PerformanceFactory::new(db, athlete_id, event.id, season.id)
            .discipline(Some(discipline.id))
            .time(Some(12.0))
            .personal_best(true)
            .build()
    };
    let stale = flagged(athlete.id).await?;
    let kept = flagged(athlete.id).await?;
    let rivals = flagged(rival.id).await?;

    let repo = PerformanceRepository::new(db);
    repo.clear_personal_best(
        BestScope {
            athlete_id: athlete.id,
            discipline_id: Some(discipline.id),
            season_id: None,
        },
        Some(kept.id),
    )
    .await?;

    assert!(!repo.find_by_id(stale.id).await?.unwrap().is_personal_best);
    assert!(repo.find_by_id(kept.id).await?.unwrap().is_personal_best);
    assert!(repo.find_by_id(rivals.id).await?.unwrap().is_personal_best);

    Ok(())
}
