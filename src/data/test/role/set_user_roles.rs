use super::*;

/// Tests replacing a user's role memberships.
///
/// Expected: the set matches the last sync exactly.
#[tokio::test]
async fn replaces_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRoleRepository::new(db);
    repo.set_user_roles(42, &[1, 2, 3]).await?;
    repo.set_user_roles(42, &[2, 4]).await?;

    let mut role_ids = repo.get_role_ids_for_user(42).await?;
    role_ids.sort();
    assert_eq!(role_ids, vec!["2".to_string(), "4".to_string()]);

    Ok(())
}

/// Tests clearing memberships with an empty set.
///
/// Expected: no memberships remain.
#[tokio::test]
async fn empty_set_clears_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRoleRepository::new(db);
    repo.set_user_roles(42, &[1, 2]).await?;
    repo.set_user_roles(42, &[]).await?;

    assert!(repo.get_role_ids_for_user(42).await?.is_empty());

    Ok(())
}

/// Tests dropping memberships when a member leaves.
///
/// Expected: only the leaver's rows are removed.
#[tokio::test]
async fn delete_by_user_leaves_others_intact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRoleRepository::new(db);
    repo.set_user_roles(42, &[1]).await?;
    repo.set_user_roles(99, &[1]).await?;

    repo.delete_by_user(42).await?;

    assert!(repo.get_role_ids_for_user(42).await?.is_empty());
    assert_eq!(repo.get_role_ids_for_user(99).await?.len(), 1);

    Ok(())
}
