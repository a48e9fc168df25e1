use super::*;

/// Tests setting a badge number without touching status.
///
/// Expected: Ok with badge set and status unchanged.
#[tokio::test]
async fn sets_badge_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = EmployeeFactory::new(db).build().await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(
            employee.id,
            UpdateEmployeeParam {
                badge_number: Some("B-1337".to_string()),
                status: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.badge_number.as_deref(), Some("B-1337"));
    assert_eq!(updated.status, EmployeeStatus::Active);

    Ok(())
}

/// Tests suspending an employee.
///
/// Expected: Ok with status suspended.
#[tokio::test]
async fn sets_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = EmployeeFactory::new(db).build().await?;

    let repo = EmployeeRepository::new(db);
    let updated = repo
        .update(
            employee.id,
            UpdateEmployeeParam {
                badge_number: None,
                status: Some(EmployeeStatus::Suspended),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, EmployeeStatus::Suspended);

    Ok(())
}

/// Tests updating a nonexistent employee.
///
/// Expected: Ok(None).
#[tokio::test]
async fn unknown_employee_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let result = repo.update(9999, UpdateEmployeeParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
