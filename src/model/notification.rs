use chrono::{DateTime, Utc};

use crate::{
    dto::notification::NotificationDto, error::AppError, util::parse::parse_u64_from_string,
};

/// User-targeted notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: u64,
    pub title: String,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;

        Ok(Self {
            id: entity.id,
            user_id,
            title: entity.title,
            body: entity.body,
            read: entity.read,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            body: self.body,
            read: self.read,
            created_at: self.created_at,
        }
    }
}
