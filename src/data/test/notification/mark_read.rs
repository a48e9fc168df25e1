use super::*;

/// Tests marking one's own notification read.
///
/// Expected: true, and the listing reflects the read flag.
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(42, "Title".to_string(), "Body".to_string())
        .await?;

    assert!(repo.mark_read(notification.id, 42).await?);

    let (notifications, _) = repo.get_for_user(42, 0, 10).await?;
    assert!(notifications[0].read);

    Ok(())
}

/// Tests that a user cannot mark another user's notification read.
///
/// Expected: false, and the row stays unread.
#[tokio::test]
async fn rejects_foreign_notification() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(42, "Title".to_string(), "Body".to_string())
        .await?;

    assert!(!repo.mark_read(notification.id, 99).await?);

    let (notifications, _) = repo.get_for_user(42, 0, 10).await?;
    assert!(!notifications[0].read);

    Ok(())
}

/// Tests marking everything read at once.
///
/// Expected: the count of previously-unread rows, zero on repeat.
#[tokio::test]
async fn marks_all_read() -> Result<(), AppError> {
    let test = tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    repo.create(42, "A".to_string(), "a".to_string()).await?;
    repo.create(42, "B".to_string(), "b".to_string()).await?;
    repo.create(99, "C".to_string(), "c".to_string()).await?;

    assert_eq!(repo.mark_all_read(42).await?, 2);
    assert_eq!(repo.mark_all_read(42).await?, 0);

    let (foreign, _) = repo.get_for_user(99, 0, 10).await?;
    assert!(!foreign[0].read);

    Ok(())
}
