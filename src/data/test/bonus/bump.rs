use super::*;

/// Tests that the first bump creates the weekly row.
///
/// Expected: a row with exactly one counter set to 1.
#[tokio::test]
async fn first_bump_creates_row() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = WorkLogRepository::new(db);
    repo.bump(employee.id, week(2026, 7, 6), BonusKind::CaseOpened).await?;

    let log = repo
        .get_for_employee_week(employee.id, week(2026, 7, 6))
        .await?
        .unwrap();
    assert_eq!(log.cases_opened, 1);
    assert_eq!(log.cases_closed, 0);
    assert_eq!(log.sanctions_issued, 0);
    assert_eq!(log.trainings_held, 0);

    Ok(())
}

/// Tests that repeated bumps increment the matching counters.
///
/// Expected: counters reflect each kind independently.
#[tokio::test]
async fn bumps_increment_matching_counter() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = WorkLogRepository::new(db);
    repo.bump(employee.id, week(2026, 7, 6), BonusKind::CaseOpened).await?;
    repo.bump(employee.id, week(2026, 7, 6), BonusKind::CaseOpened).await?;
    repo.bump(employee.id, week(2026, 7, 6), BonusKind::TrainingConducted).await?;

    let log = repo
        .get_for_employee_week(employee.id, week(2026, 7, 6))
        .await?
        .unwrap();
    assert_eq!(log.cases_opened, 2);
    assert_eq!(log.trainings_held, 1);

    Ok(())
}

/// Tests that weeks are tracked independently.
///
/// Expected: one row per (employee, week).
#[tokio::test]
async fn weeks_are_independent() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = WorkLogRepository::new(db);
    repo.bump(employee.id, week(2026, 7, 6), BonusKind::CaseClosed).await?;
    repo.bump(employee.id, week(2026, 7, 13), BonusKind::CaseClosed).await?;

    let first = repo
        .get_for_employee_week(employee.id, week(2026, 7, 6))
        .await?
        .unwrap();
    let second = repo
        .get_for_employee_week(employee.id, week(2026, 7, 13))
        .await?
        .unwrap();
    assert_eq!(first.cases_closed, 1);
    assert_eq!(second.cases_closed, 1);

    Ok(())
}

/// Tests that adjustments don't touch counters.
///
/// Expected: no work-log row is created for an adjustment.
#[tokio::test]
async fn adjustment_has_no_counter() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = WorkLogRepository::new(db);
    repo.bump(employee.id, week(2026, 7, 6), BonusKind::Adjustment).await?;

    assert!(repo
        .get_for_employee_week(employee.id, week(2026, 7, 6))
        .await?
        .is_none());

    Ok(())
}
