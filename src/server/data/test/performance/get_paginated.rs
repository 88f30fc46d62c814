use super::*;

/// Tests filtering and sorting the performance listing.
///
/// Verifies that only the athlete's rows are counted, that they are sorted by time
/// ascending, and that the page size limits the returned rows.
///
/// Expected: Ok with total 3 and the two fastest rows on page 1
#[tokio::test]
async fn filters_by_athlete_and_sorts_by_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (sport, season, _, event) = factory::helpers::create_event_with_dependencies(db).await?;
    let (athlete, discipline) =
        factory::helpers::create_athlete_in_discipline(db, sport.id, Some("seconds")).await?;
    let other = factory::create_athlete(db).await?;

    for (athlete_id, time) in [
        (athlete.id, 12.4),
        (athlete.id, 11.9),
        (other.id, 10.0),
        (athlete.id, 12.1),
    ] {
        factory::performance::PerformanceFactory::new(db, athlete_id, event.id, season.id)
            .discipline(Some(discipline.id))
            .time(Some(time))
            .build()
            .await?;
    }

    let filter = PerformanceFilter {
        athlete_id: Some(athlete.id),
        sort_by: PerformanceSortField::Time,
        sort_order: SortOrder::Asc,
        ..Default::default()
    };
    let (rows, total) = PerformanceRepository::new(db)
        .get_paginated(&filter, 1, 2)
        .await?;

    assert_eq!(total, 3);
    let times: Vec<Option<f64>> = rows.iter().map(|p| p.metrics.time).collect();
    assert_eq!(times, vec![Some(11.9), Some(12.1)]);

    Ok(())
}
