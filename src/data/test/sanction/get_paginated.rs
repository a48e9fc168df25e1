use super::*;

/// Tests filtering sanctions to a single employee.
///
/// Expected: only the target employee's sanctions are returned.
#[tokio::test]
async fn filters_by_employee() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = create_employee(db).await?;
    let b = create_employee(db).await?;
    create_sanction(db, a.id).await?;
    create_sanction(db, a.id).await?;
    create_sanction(db, b.id).await?;

    let (sanctions, total) = SanctionRepository::new(db)
        .get_paginated(Some(a.id), 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert!(sanctions.iter().all(|s| s.employee_id == a.id));

    Ok(())
}

/// Tests unfiltered pagination counts.
///
/// Expected: total covers all sanctions while pages stay bounded.
#[tokio::test]
async fn paginates_all_sanctions() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;
    for _ in 0..3 {
        create_sanction(db, employee.id).await?;
    }

    let (page, total) = SanctionRepository::new(db).get_paginated(None, 0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);

    Ok(())
}
