use super::*;

fn sprinter(codes: &[&str]) -> CreateIndividualAthleteDto {
    CreateIndividualAthleteDto {
        code: "ATH-100".to_string(),
        first_name: "Blessing".to_string(),
        last_name: "Okagbare".to_string(),
        sport_type: SportType::Athletics,
        disciplines: codes
            .iter()
            .map(|code| DisciplineEntryDto {
                code: code.to_string(),
                current_rank: Some(1),
            })
            .collect(),
        date_of_birth: birthday(),
        nationality: "Nigerian".to_string(),
        gender: Gender::Female,
        height: 1.8,
        weight: 68.0,
        bio: None,
    }
}

/// Tests registering an athlete with their disciplines.
///
/// Verifies that a discipline listed twice is linked only once.
///
/// Expected: Ok with both disciplines linked
#[tokio::test]
async fn links_disciplines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    factory::discipline::DisciplineFactory::new(db, sport.id)
        .code("100M")
        .build()
        .await?;
    factory::discipline::DisciplineFactory::new(db, sport.id)
        .code("LJ")
        .unit(Some("meters"))
        .build()
        .await?;

    let athlete = AthleteService::new(db)
        .create_individual_athlete(sprinter(&["100M", "LJ", "100M"]))
        .await?;

    let codes: Vec<&str> = athlete.disciplines.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["100M", "LJ"]);
    assert_eq!(athlete.team_id, None);

    Ok(())
}

/// Tests registering with a discipline the sport does not have.
///
/// Verifies that nothing is stored when any code is unknown.
///
/// Expected: Err(BadRequest) and no athlete
#[tokio::test]
async fn rejects_unknown_discipline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    factory::discipline::DisciplineFactory::new(db, sport.id)
        .code("100M")
        .build()
        .await?;

    let service = AthleteService::new(db);
    let result = service
        .create_individual_athlete(sprinter(&["100M", "MARATHON"]))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(matches!(
        service.get_by_code("ATH-100").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests registering an individual athlete for a team sport.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_team_sport() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_team_sport(db).await?;

    let mut dto = sprinter(&[]);
    dto.sport_type = SportType::Basketball;
    let result = AthleteService::new(db).create_individual_athlete(dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
