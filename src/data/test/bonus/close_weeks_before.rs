use super::*;

/// Tests that the rollover closes past weeks and leaves the current one open.
///
/// Expected: the old week's payments are submitted, the current week's are not.
#[tokio::test]
async fn closes_only_past_weeks() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = BonusPaymentRepository::new(db);
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 6, 29)).await?;
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 7, 6)).await?;

    let closed = repo.close_weeks_before(week(2026, 7, 6)).await?;
    assert_eq!(closed, 1);

    let (payments, _) = repo.get_paginated(Some(week(2026, 6, 29)), None, 0, 10).await?;
    assert!(payments.iter().all(|p| p.submitted));

    let (payments, _) = repo.get_paginated(Some(week(2026, 7, 6)), None, 0, 10).await?;
    assert!(payments.iter().all(|p| !p.submitted));

    Ok(())
}

/// Tests that closing is idempotent.
///
/// Expected: a second identical rollover touches zero rows.
#[tokio::test]
async fn second_close_is_a_noop() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = BonusPaymentRepository::new(db);
    repo.create(employee.id, BonusKind::SanctionIssued, 250, week(2026, 6, 29)).await?;

    assert_eq!(repo.close_weeks_before(week(2026, 7, 6)).await?, 1);
    assert_eq!(repo.close_weeks_before(week(2026, 7, 6)).await?, 0);

    Ok(())
}

/// Tests that missed rollovers are caught up.
///
/// Expected: several old weeks close in one pass.
#[tokio::test]
async fn catches_up_multiple_missed_weeks() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let repo = BonusPaymentRepository::new(db);
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 6, 15)).await?;
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 6, 22)).await?;
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 6, 29)).await?;

    assert_eq!(repo.close_weeks_before(week(2026, 7, 6)).await?, 3);

    Ok(())
}
