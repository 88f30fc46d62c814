use super::*;

/// Tests collecting a sport's athletes through teams and disciplines.
///
/// Verifies that athletes on the sport's teams and athletes linked to its disciplines
/// are both returned, and unrelated athletes are not.
///
/// Expected: Ok with the two related athletes
#[tokio::test]
async fn includes_team_members_and_discipline_entrants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_athlete_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let athletics = factory::create_individual_sport(db).await?;
    let basketball = factory::create_team_sport(db).await?;
    let team = factory::create_team(db, basketball.id).await?;

    let (sprinter, _) =
        factory::helpers::create_athlete_in_discipline(db, athletics.id, Some("seconds")).await?;
    let guard = factory::athlete::AthleteFactory::new(db)
        .team(Some(team.id))
        .build()
        .await?;
    factory::create_athlete(db).await?;

    let repo = AthleteRepository::new(db);

    let runners = repo.get_by_sport(athletics.id).await?;
    assert_eq!(runners.len(), 1);
    assert_eq!(runners[0].id, sprinter.id);

    let players = repo.get_by_sport(basketball.id).await?;
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, guard.id);

    Ok(())
}
