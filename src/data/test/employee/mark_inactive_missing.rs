use super::*;

/// Tests deactivating employees absent from the roster snapshot.
///
/// Expected: missing employees marked inactive, present ones untouched.
#[tokio::test]
async fn deactivates_missing_employees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let present = EmployeeFactory::new(db).user_id("10").build().await?;
    let missing = EmployeeFactory::new(db).user_id("20").build().await?;

    let repo = EmployeeRepository::new(db);
    let deactivated = repo.mark_inactive_missing(&[10]).await?;

    assert_eq!(deactivated, 1);

    let present = repo.find_by_id(present.id).await?.unwrap();
    let missing = repo.find_by_id(missing.id).await?.unwrap();
    assert_eq!(present.status, EmployeeStatus::Active);
    assert_eq!(missing.status, EmployeeStatus::Inactive);

    Ok(())
}

/// Tests that already-inactive employees don't count toward the result.
///
/// Expected: zero rows affected on a second identical pass.
#[tokio::test]
async fn second_pass_is_a_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    EmployeeFactory::new(db).user_id("20").build().await?;

    let repo = EmployeeRepository::new(db);
    assert_eq!(repo.mark_inactive_missing(&[10]).await?, 1);
    assert_eq!(repo.mark_inactive_missing(&[10]).await?, 0);

    Ok(())
}

/// Tests deactivation with an empty roster.
///
/// Expected: every non-inactive employee is deactivated.
#[tokio::test]
async fn empty_roster_deactivates_everyone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    EmployeeFactory::new(db).build().await?;
    EmployeeFactory::new(db).build().await?;

    let repo = EmployeeRepository::new(db);
    assert_eq!(repo.mark_inactive_missing(&[]).await?, 2);

    Ok(())
}
