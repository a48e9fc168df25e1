use super::*;

/// Tests inserting a payment into a week window.
///
/// Expected: Ok with the amount, kind, and week stored and submitted false.
#[tokio::test]
async fn inserts_unsubmitted_payment() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let payment = BonusPaymentRepository::new(db)
        .create(employee.id, BonusKind::CaseClosed, 1500, week(2026, 7, 6))
        .await?;

    assert_eq!(payment.employee_id, employee.id);
    assert_eq!(payment.kind, BonusKind::CaseClosed);
    assert_eq!(payment.amount, 1500);
    assert_eq!(payment.week_start, week(2026, 7, 6));
    assert!(!payment.submitted);

    Ok(())
}

/// Tests summing one employee's payments for a week.
///
/// Expected: only payments of that week and employee contribute.
#[tokio::test]
async fn week_total_sums_one_window() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;
    let other = create_employee(db).await?;

    let repo = BonusPaymentRepository::new(db);
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 7, 6)).await?;
    repo.create(employee.id, BonusKind::CaseClosed, 1500, week(2026, 7, 6)).await?;
    repo.create(employee.id, BonusKind::CaseOpened, 500, week(2026, 7, 13)).await?;
    repo.create(other.id, BonusKind::CaseOpened, 500, week(2026, 7, 6)).await?;

    assert_eq!(repo.week_total(employee.id, week(2026, 7, 6)).await?, 2000);

    Ok(())
}
