use super::*;

/// Tests recording a batch in submission order.
///
/// Verifies that best flags within one batch are evaluated row by row, so the fastest
/// of three submitted times ends up holding the personal best.
///
/// Expected: Ok with three rows and only the 11.7 row flagged
#[tokio::test]
async fn evaluates_bests_in_submission_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;

    let mut performances = Vec::new();
    for (i, seconds) in [12.0, 11.7, 11.8].into_iter().enumerate() {
        let event = live_event(db, fixture.sport.id, fixture.season.id).await?;
        performances.push(dto(
            fixture.athlete.id,
            event.id,
            Some(fixture.discipline.id),
            day(i as u32 + 1),
            time(seconds),
        ));
    }

    let service = PerformanceService::new(db);
    let created = service
        .create_bulk(BulkPerformanceDto { performances })
        .await?;

    assert_eq!(created.len(), 3);
    let rows = reload(db, &created).await?;
    assert_eq!(personal_best_flags(&rows), vec![false, true, false]);

    Ok(())
}

/// Tests that one invalid row rejects the whole batch.
///
/// Verifies that when the second of two rows breaks a sport rule nothing is stored and
/// the error names the offending row.
///
/// Expected: Err(Validation) with `performances[1]` fields and no stored rows
#[tokio::test]
async fn failing_row_rolls_back_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_performance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let fixture = athletics(db, Some("seconds")).await?;
    let first_event = live_event(db, fixture.sport.id, fixture.season.id).await?;
    let second_event = live_event(db, fixture.sport.id, fixture.season.id).await?;

    let service = PerformanceService::new(db);
    let result = service
        .create_bulk(BulkPerformanceDto {
            performances: vec![
                dto(
                    fixture.athlete.id,
                    first_event.id,
                    Some(fixture.discipline.id),
                    day(1),
                    time(12.0),
                ),
                dto(
                    fixture.athlete.id,
                    second_event.id,
                    Some(fixture.discipline.id),
                    day(2),
                    time(-1.0),
                ),
            ],
        })
        .await;

    match result {
        Err(AppError::Validation { errors, .. }) => {
            assert!(errors.keys().all(|k| k.starts_with("performances[1].")))
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let (rows, total) = service
        .get_paginated(&PerformanceFilter::default(), 1, 10)
        .await?;
    assert!(rows.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
