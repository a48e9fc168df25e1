use chrono::{DateTime, Utc};

use crate::{
    dto::announcement::AnnouncementDto, error::AppError, util::parse::parse_u64_from_string,
};

/// Department-wide announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct Announcement {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub author_user_id: u64,
    pub pinned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Announcement {
    pub fn from_entity(entity: entity::announcement::Model) -> Result<Self, AppError> {
        let author_user_id = parse_u64_from_string(entity.author_user_id)?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            author_user_id,
            pinned: entity.pinned,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> AnnouncementDto {
        AnnouncementDto {
            id: self.id,
            title: self.title,
            body: self.body,
            author_user_id: self.author_user_id,
            pinned: self.pinned,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for publishing an announcement.
#[derive(Debug, Clone)]
pub struct CreateAnnouncementParam {
    pub title: String,
    pub body: String,
    pub author_user_id: u64,
}

/// Parameters for editing an announcement.
#[derive(Debug, Clone, Default)]
pub struct UpdateAnnouncementParam {
    pub title: Option<String>,
    pub body: Option<String>,
}
