use super::*;

/// Tests creating an employee from a roster snapshot entry.
///
/// Expected: Ok with an active record carrying the parsed rank and
/// departments.
#[tokio::test]
async fn creates_employee_from_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "J. Hoover".to_string(),
            rank_level: 7,
            departments: vec!["patrol".to_string(), "traffic".to_string()],
        })
        .await?;

    assert_eq!(employee.user_id, 42);
    assert_eq!(employee.rank_level, 7);
    assert_eq!(employee.status, EmployeeStatus::Active);
    assert_eq!(
        employee.departments,
        vec!["patrol".to_string(), "traffic".to_string()]
    );

    Ok(())
}

/// Tests that a second sync refreshes name and rank and replaces departments.
///
/// Expected: Ok with updated fields and the old department set gone.
#[tokio::test]
async fn refreshes_rank_and_replaces_departments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let first = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "Old Name".to_string(),
            rank_level: 3,
            departments: vec!["patrol".to_string()],
        })
        .await?;

    let second = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "New Name".to_string(),
            rank_level: 5,
            departments: vec!["detectives".to_string()],
        })
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.name, "New Name");
    assert_eq!(second.rank_level, 5);
    assert_eq!(second.departments, vec!["detectives".to_string()]);

    Ok(())
}

/// Tests that sync reactivates an inactive employee who rejoined the roster.
///
/// Expected: Ok with status back to active.
#[tokio::test]
async fn reactivates_inactive_employee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "Returning".to_string(),
            rank_level: 2,
            departments: vec![],
        })
        .await?;

    repo.update(
        employee.id,
        UpdateEmployeeParam {
            status: Some(EmployeeStatus::Inactive),
            ..Default::default()
        },
    )
    .await?;

    let resynced = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "Returning".to_string(),
            rank_level: 2,
            departments: vec![],
        })
        .await?;

    assert_eq!(resynced.status, EmployeeStatus::Active);

    Ok(())
}

/// Tests that sync does not lift an API-side suspension.
///
/// Expected: Ok with the employee still suspended after a roster pass.
#[tokio::test]
async fn preserves_suspension_through_sync() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmployeeRepository::new(db);
    let employee = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "Suspended".to_string(),
            rank_level: 2,
            departments: vec![],
        })
        .await?;

    repo.update(
        employee.id,
        UpdateEmployeeParam {
            status: Some(EmployeeStatus::Suspended),
            ..Default::default()
        },
    )
    .await?;

    let resynced = repo
        .upsert_from_roster(RosterUpsertParam {
            user_id: 42,
            name: "Suspended".to_string(),
            rank_level: 2,
            departments: vec![],
        })
        .await?;

    assert_eq!(resynced.status, EmployeeStatus::Suspended);

    Ok(())
}
