use super::*;

/// Tests replacing a role's grants.
///
/// Expected: old grants gone, new set visible through the union query.
#[tokio::test]
async fn replaces_grants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = create_role(db).await?;
    grant_permission(db, role.role_id.clone(), "old.permission").await?;

    let grant_repo = RolePermissionRepository::new(db);
    let role_id: u64 = role.role_id.parse().unwrap();
    grant_repo
        .set_permissions(
            role_id,
            &["employees.view".to_string(), "sanctions.manage".to_string()],
        )
        .await?;

    let permissions = grant_repo.get_for_roles(&[role.role_id]).await?;
    assert_eq!(
        permissions,
        vec!["employees.view".to_string(), "sanctions.manage".to_string()]
    );

    Ok(())
}

/// Tests the union of grants across several roles.
///
/// Expected: a sorted, deduplicated union.
#[tokio::test]
async fn unions_grants_across_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = create_role(db).await?;
    let b = create_role(db).await?;
    grant_permission(db, a.role_id.clone(), "employees.view").await?;
    grant_permission(db, a.role_id.clone(), "leadership.view").await?;
    grant_permission(db, b.role_id.clone(), "employees.view").await?;

    let permissions = RolePermissionRepository::new(db)
        .get_for_roles(&[a.role_id, b.role_id])
        .await?;

    assert_eq!(
        permissions,
        vec!["employees.view".to_string(), "leadership.view".to_string()]
    );

    Ok(())
}

/// Tests the role mirror upsert path used by the bot and roster sync.
///
/// Expected: a rename updates the existing row in place.
#[tokio::test]
async fn upsert_renames_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role_repo = DiscordRoleRepository::new(db);
    role_repo
        .upsert(UpsertRoleParam {
            role_id: 555,
            guild_id: 1,
            name: "[05] Senior Officer".to_string(),
            position: 3,
        })
        .await?;
    role_repo
        .upsert(UpsertRoleParam {
            role_id: 555,
            guild_id: 1,
            name: "[06] Corporal".to_string(),
            position: 4,
        })
        .await?;

    let role = role_repo.find_by_role_id(555).await?.unwrap();
    assert_eq!(role.name, "[06] Corporal");
    assert_eq!(role.position, 4);

    Ok(())
}
