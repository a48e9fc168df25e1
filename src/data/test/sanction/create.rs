use super::*;

/// Tests recording a sanction.
///
/// Expected: Ok with kind, reason, and issuer stored.
#[tokio::test]
async fn records_sanction() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let employee = create_employee(db).await?;

    let sanction = SanctionRepository::new(db)
        .create(CreateSanctionParam {
            employee_id: employee.id,
            issued_by: 99,
            kind: SanctionKind::Reprimand,
            reason: "Ignored radio protocol".to_string(),
            expires_at: None,
        })
        .await?;

    assert_eq!(sanction.employee_id, employee.id);
    assert_eq!(sanction.issued_by, 99);
    assert_eq!(sanction.kind, SanctionKind::Reprimand);
    assert_eq!(sanction.reason, "Ignored radio protocol");
    assert!(sanction.expires_at.is_none());

    Ok(())
}
