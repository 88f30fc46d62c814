use super::*;

fn team_athlete(code: &str, team_code: &str, position_code: &str) -> CreateTeamAthleteDto {
    CreateTeamAthleteDto {
        code: code.to_string(),
        first_name: " Chidi ".to_string(),
        last_name: "Okafor".to_string(),
        team_code: team_code.to_string(),
        position_code: position_code.to_string(),
        sport_type: SportType::Basketball,
        date_of_birth: birthday(),
        nationality: "Nigerian".to_string(),
        gender: Gender::Male,
        height: 1.98,
        weight: 92.0,
        bio: None,
    }
}

/// Tests registering an athlete on a team.
///
/// Verifies that the team and position are resolved by code and the names trimmed.
///
/// Expected: Ok with team and position codes set
#[tokio::test]
async fn registers_athlete_on_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_team_sport(db).await?;
    let team = factory::team::TeamFactory::new(db, sport.id)
        .code("BBT001")
        .build()
        .await?;
    factory::position::PositionFactory::new(db, sport.id)
        .code("PG")
        .build()
        .await?;

    let athlete = AthleteService::new(db)
        .create_team_athlete(team_athlete("BB-10", "BBT001", "PG"))
        .await?;

    assert_eq!(athlete.first_name, "Chidi");
    assert_eq!(athlete.team_id, Some(team.id));
    assert_eq!(athlete.team_code.as_deref(), Some("BBT001"));
    assert_eq!(athlete.position_code.as_deref(), Some("PG"));
    assert!(athlete.is_active);

    Ok(())
}

/// Tests registering a second athlete with a taken code.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_team_sport(db).await?;
    factory::team::TeamFactory::new(db, sport.id)
        .code("BBT001")
        .build()
        .await?;
    factory::position::PositionFactory::new(db, sport.id)
        .code("C")
        .build()
        .await?;
    factory::athlete::AthleteFactory::new(db)
        .code("BB-11")
        .build()
        .await?;

    let result = AthleteService::new(db)
        .create_team_athlete(team_athlete("BB-11", "BBT001", "C"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering on a team of another sport.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_team_of_other_sport() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_team_sport(db).await?;
    let football = factory::sport::SportFactory::new(db)
        .name("FOOTBALL")
        .team_sport(true)
        .build()
        .await?;
    factory::team::TeamFactory::new(db, football.id)
        .code("FBT001")
        .build()
        .await?;

    let result = AthleteService::new(db)
        .create_team_athlete(team_athlete("BB-12", "FBT001", "PG"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
