use super::*;

/// Tests seeding an empty database.
///
/// Expected: Ok with every sport, position, discipline and default team inserted
#[tokio::test]
async fn seeds_reference_data() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let report = SeedService::new(db).seed().await?;

    assert_eq!(
        report,
        SeedReport {
            sports: 5,
            positions: 9,
            disciplines: 20,
            teams: 2,
        }
    );

    let basketball = SportRepository::new(db)
        .find_by_name(SportType::Basketball)
        .await?
        .unwrap();
    assert!(basketball.is_team_sport);
    let team = TeamRepository::new(db).find_by_code("BBT001").await?.unwrap();
    assert_eq!(team.sport_id, basketball.id);

    Ok(())
}

/// Tests running the seed twice.
///
/// Verifies that the second run finds every row and inserts nothing.
///
/// Expected: Ok with an empty report
#[tokio::test]
async fn second_run_inserts_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SeedService::new(db);
    service.seed().await?;
    let report = service.seed().await?;

    assert_eq!(report, SeedReport::default());

    Ok(())
}
