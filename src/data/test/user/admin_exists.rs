use super::*;

/// Tests admin existence check on an empty user table.
///
/// Expected: Ok(false) with no users present.
#[tokio::test]
async fn reports_no_admin_on_empty_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests admin existence check with only regular users.
///
/// Expected: Ok(false) until an admin is created, then Ok(true).
#[tokio::test]
async fn detects_admin_among_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(UpsertUserParam {
        discord_id: 1,
        name: "Regular".to_string(),
        is_admin: None,
    })
    .await?;
    assert!(!repo.admin_exists().await?);

    repo.upsert(UpsertUserParam {
        discord_id: 2,
        name: "Admin".to_string(),
        is_admin: Some(true),
    })
    .await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
