//! Calendar domain models, recurrence rules, and occurrence expansion types.

use chrono::{DateTime, Utc};

use crate::{
    dto::calendar::{CalendarEventDto, OccurrenceDto},
    error::AppError,
    util::parse::parse_u64_from_string,
};

/// Recurrence rule of a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

/// Calendar event with an optional recurrence rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub recurrence: Recurrence,
    pub created_by: u64,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn from_entity(entity: entity::calendar_event::Model) -> Result<Self, AppError> {
        let created_by = parse_u64_from_string(entity.created_by)?;
        let recurrence = Recurrence::parse(&entity.recurrence).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown recurrence '{}' for calendar event {}",
                entity.recurrence, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            recurrence,
            created_by,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> CalendarEventDto {
        CalendarEventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            recurrence: self.recurrence.as_str().to_string(),
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// One concrete occurrence of an event inside an expansion window.
#[derive(Debug, Clone, PartialEq)]
pub struct Occurrence {
    pub event_id: i32,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Occurrence {
    pub fn into_dto(self) -> OccurrenceDto {
        OccurrenceDto {
            event_id: self.event_id,
            title: self.title,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}

/// Parameters for creating a calendar event.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub recurrence: Recurrence,
    pub created_by: u64,
}

/// Parameters for editing a calendar event.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParam {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub recurrence: Option<Recurrence>,
}
