use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with user created and admin status defaulting to false.
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert!(!user.admin);

    Ok(())
}

/// Tests updating an existing user's name without affecting admin status.
///
/// Expected: Ok with name updated and admin status preserved.
#[tokio::test]
async fn updates_name_preserves_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(UpsertUserParam {
        discord_id: 123456789,
        name: "OriginalName".to_string(),
        is_admin: Some(true),
    })
    .await?;

    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "UpdatedName".to_string(),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.name, "UpdatedName");
    assert!(user.admin);

    Ok(())
}

/// Tests revoking admin status on update.
///
/// Expected: Ok with admin status set to false when is_admin is Some(false).
#[tokio::test]
async fn revokes_admin_status_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.upsert(UpsertUserParam {
        discord_id: 123456789,
        name: "AdminUser".to_string(),
        is_admin: Some(true),
    })
    .await?;

    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "RegularUser".to_string(),
            is_admin: Some(false),
        })
        .await?;

    assert!(!user.admin);

    Ok(())
}
