//! Notification dispatch: persist, then push over the socket.

use sea_orm::DatabaseConnection;

use crate::{
    data::notification::NotificationRepository, error::AppError, model::notification::Notification,
    realtime::hub::RealtimeHub,
};

pub struct NotifyService<'a> {
    db: &'a DatabaseConnection,
    hub: &'a RealtimeHub,
}

impl<'a> NotifyService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a RealtimeHub) -> Self {
        Self { db, hub }
    }

    /// Stores a notification and pushes it to the user's open sockets.
    ///
    /// The database row is the source of truth; the socket push is
    /// best-effort and lost events are recovered by listing notifications.
    pub async fn send(
        &self,
        user_id: u64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Notification, AppError> {
        let notification = NotificationRepository::new(self.db)
            .create(user_id, title.into(), body.into())
            .await?;

        self.hub.notify_user(user_id, notification.clone().into_dto());

        Ok(notification)
    }
}
