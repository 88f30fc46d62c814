use super::*;

/// Tests the discipline leaderboard for a timed discipline.
///
/// Verifies that rows are ordered by time ascending, that equal times fall back to the
/// earlier date and that `limit` caps the result.
///
/// Expected: Ok with the 10.9 row first and the earlier 11.2 row second
#[tokio::test]
async fn orders_times_ascending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let event = live_event(db, fixture.sport.id, fixture.season.id).await?;

    let service = PerformanceService::new(db);
    let mut ids = Vec::new();
    for (n, seconds) in [(3, 11.2), (1, 11.2), (2, 10.9), (4, 11.8)] {
        let athlete = factory::create_athlete(db).await?;
        let row = service
            .create(dto(
                athlete.id,
                event.id,
                Some(fixture.discipline.id),
                day(n),
                time(seconds),
            ))
            .await?;
        ids.push(row.id);
    }

    let top = service.get_top(fixture.discipline.id, 3, None).await?;

    let order: Vec<i32> = top.iter().map(|entry| entry.performance.id).collect();
    assert_eq!(order, vec![ids[2], ids[1], ids[0]]);
    assert_eq!(top[0].rank, 1);
    assert_eq!(top[0].value, 10.9);

    Ok(())
}
