use super::*;

/// Tests filtering the employee list by status.
///
/// Expected: only employees with the requested status are returned.
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    EmployeeFactory::new(db).build().await?;
    EmployeeFactory::new(db).status("inactive").build().await?;

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(EmployeeFilter {
            department: None,
            status: Some(EmployeeStatus::Inactive),
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.employees[0].status, EmployeeStatus::Inactive);

    Ok(())
}

/// Tests filtering the employee list by department membership.
///
/// Expected: only members of the requested department are returned.
#[tokio::test]
async fn filters_by_department() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let patrol = EmployeeFactory::new(db).build().await?;
    EmployeeFactory::new(db).build().await?;

    let repo = EmployeeRepository::new(db);
    repo.set_departments(patrol.id, &["patrol".to_string()]).await?;

    let page = repo
        .get_paginated(EmployeeFilter {
            department: Some("patrol".to_string()),
            status: None,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.employees[0].id, patrol.id);

    Ok(())
}

/// Tests that listing orders by rank descending.
///
/// Expected: the captain appears before the cadet.
#[tokio::test]
async fn orders_by_rank_descending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_employee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    EmployeeFactory::new(db).name("Cadet").rank_level(1).build().await?;
    EmployeeFactory::new(db).name("Captain").rank_level(11).build().await?;

    let repo = EmployeeRepository::new(db);
    let page = repo
        .get_paginated(EmployeeFilter {
            department: None,
            status: None,
            page: 0,
            per_page: 10,
        })
        .await?;

    assert_eq!(page.employees[0].name, "Captain");
    assert_eq!(page.employees[1].name, "Cadet");

    Ok(())
}
