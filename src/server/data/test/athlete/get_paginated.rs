use super::*;

/// Tests ordering of the athlete listing.
///
/// Verifies that athletes come back ordered by last name, then first name, with the
/// total counting every match.
///
/// Expected: Ok with athletes ordered by name
#[tokio::test]
async fn orders_by_last_then_first_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (first, last) in [("Tobi", "Amusan"), ("Ese", "Brume"), ("Ada", "Amusan")] {
        factory::athlete::AthleteFactory::new(db)
            .name(first, last)
            .build()
            .await?;
    }

    let (athletes, total) = AthleteRepository::new(db)
        .get_paginated(&AthleteFilter::default(), 1, 10)
        .await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = athletes.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Tobi", "Ese"]);

    Ok(())
}

/// Tests combining the search and team filters.
///
/// Expected: Ok with the single athlete matching both
#[tokio::test]
async fn combines_search_and_team_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_team_sport(db).await?;
    let eagles = factory::team::TeamFactory::new(db, sport.id)
        .code("BBT001")
        .build()
        .await?;
    let hawks = factory::create_team(db, sport.id).await?;

    let wanted = factory::athlete::AthleteFactory::new(db)
        .name("Kelechi", "Nwosu")
        .team(Some(eagles.id))
        .build()
        .await?;
    factory::athlete::AthleteFactory::new(db)
        .name("Kelechi", "Obi")
        .team(Some(hawks.id))
        .build()
        .await?;
    factory::athlete::AthleteFactory::new(db)
        .name("Musa", "Bello")
        .team(Some(eagles.id))
        .build()
        .await?;

    let filter = AthleteFilter {
        search: Some("Kelechi".to_string()),
        team_code: Some("BBT001".to_string()),
        ..Default::default()
    };
    let (athletes, total) = AthleteRepository::new(db)
        .get_paginated(&filter, 1, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(athletes[0].id, wanted.id);
    assert_eq!(athletes[0].team_code.as_deref(), Some("BBT001"));

    Ok(())
}

/// Tests filtering by discipline code.
///
/// Expected: Ok with only the athlete linked to the discipline
#[tokio::test]
async fn filters_by_discipline_code() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let sport = factory::create_individual_sport(db).await?;
    let (linked, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;
    factory::create_athlete(db).await?;

    let filter = AthleteFilter {
        discipline_code: Some(discipline.code.clone()),
        ..Default::default()
    };
    let (athletes, total) = AthleteRepository::new(db)
        .get_paginated(&filter, 1, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(athletes[0].id, linked.id);
    assert_eq!(athletes[0].disciplines[0].code, discipline.code);

    Ok(())
}
