use super::*;

/// Tests that scope rows come back in chronological order.
///
/// Verifies that rows inserted out of date order are returned oldest first, and that
/// the excluded row is left out.
///
/// Expected: Ok with the remaining rows ordered by date
#[tokio::test]
async fn returns_rows_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;

    let mut ids = Vec::new();
    for day in [5, 1, 3] {
        let row = factory::performance::PerformanceFactory::new(db, athlete.id, event.id, season.id)
            .discipline(Some(discipline.id))
            .date(Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap())
            .time(Some(11.0))
            .build()
            .await?;
        ids.push(row.id);
    }

    let scope = BestScope {
        athlete_id: athlete.id,
        discipline_id: Some(discipline.id),
        season_id: None,
    };
    let repo = PerformanceRepository::new(db);

    let all: Vec<i32> = repo
        .get_in_scope(scope, None)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(all, vec![ids[1], ids[2], ids[0]]);

    let without: Vec<i32> = repo
        .get_in_scope(scope, Some(ids[2]))
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(without, vec![ids[1], ids[0]]);

    Ok(())
}

/// Tests that a season scope leaves out rows of other seasons.
///
/// Expected: Ok with only the row of the requested season
#[tokio::test]
async fn season_scope_filters_by_season() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, gameday, event) =
        factory::helpers::create_event_with_dependencies(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;
    let other_season = factory::create_season(db).await?;
    let other_event = factory::create_event(db, sport.id, other_season.id, gameday.id).await?;

    let current = factory::performance::PerformanceFactory::new(db, athlete.id, event.id, season.id)
        .discipline(Some(discipline.id))
        .time(Some(11.0))
        .build()
        .await?;
    factory::performance::PerformanceFactory::new(db, athlete.id, other_event.id, other_season.id)
        .discipline(Some(discipline.id))
        .time(Some(10.8))
        .build()
        .await?;

    let rows = PerformanceRepository::new(db)
        .get_in_scope(
            BestScope {
                athlete_id: athlete.id,
                discipline_id: Some(discipline.id),
                season_id: Some(season.id),
            },
            None,
        )
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, current.id);

    Ok(())
}

/// Tests the scope of team-sport rows, which carry no discipline.
///
/// Expected: Ok with only the discipline-less row
#[tokio::test]
async fn null_discipline_scope_matches_only_null_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;

    let team_row = factory::create_performance(db, athlete.id, event.id, season.id).await?;
    factory::performance::PerformanceFactory::new(db, athlete.id, event.id, season.id)
        .discipline(Some(discipline.id))
        .build()
        .await?;

    let rows = PerformanceRepository::new(db)
        .get_in_scope(
            BestScope {
                athlete_id: athlete.id,
                discipline_id: None,
                season_id: None,
            },
            None,
        )
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, team_row.id);

    Ok(())
}
