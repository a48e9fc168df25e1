use super::*;

/// Tests amending a sanction's reason.
///
/// Expected: Ok with reason replaced and expiry untouched.
#[tokio::test]
async fn amends_reason() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;
    let sanction = create_sanction(db, employee.id).await?;

    let repo = SanctionRepository::new(db);
    let updated = repo
        .update(
            sanction.id,
            UpdateSanctionParam {
                reason: Some("Amended after review".to_string()),
                expires_at: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.reason, "Amended after review");

    Ok(())
}

/// Tests deleting a sanction.
///
/// Expected: true on first delete, false once gone.
#[tokio::test]
async fn delete_reports_removal() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;
    let sanction = create_sanction(db, employee.id).await?;

    let repo = SanctionRepository::new(db);
    assert!(repo.delete(sanction.id).await?);
    assert!(!repo.delete(sanction.id).await?);
    assert!(repo.find_by_id(sanction.id).await?.is_none());

    Ok(())
}
