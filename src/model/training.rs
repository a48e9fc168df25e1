//! Training domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    dto::training::{TrainingAttendeeDto, TrainingDto},
    error::AppError,
    util::parse::parse_u64_from_string,
};

/// Training session conducted by an instructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub id: i32,
    pub title: String,
    /// Discord ID of the instructor.
    pub instructor_user_id: u64,
    pub conducted_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl Training {
    pub fn from_entity(entity: entity::training::Model) -> Result<Self, AppError> {
        let instructor_user_id = parse_u64_from_string(entity.instructor_user_id)?;

        Ok(Self {
            id: entity.id,
            title: entity.title,
            instructor_user_id,
            conducted_at: entity.conducted_at,
            location: entity.location,
            notes: entity.notes,
        })
    }

    pub fn into_dto(self) -> TrainingDto {
        TrainingDto {
            id: self.id,
            title: self.title,
            instructor_user_id: self.instructor_user_id,
            conducted_at: self.conducted_at,
            location: self.location,
            notes: self.notes,
        }
    }
}

/// Attendance of one employee at a training.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingAttendee {
    pub employee_id: i32,
    pub passed: bool,
}

impl TrainingAttendee {
    pub fn from_entity(entity: entity::training_attendance::Model) -> Self {
        Self {
            employee_id: entity.employee_id,
            passed: entity.passed,
        }
    }

    pub fn into_dto(self) -> TrainingAttendeeDto {
        TrainingAttendeeDto {
            employee_id: self.employee_id,
            passed: self.passed,
        }
    }
}

/// Parameters for recording a conducted training.
#[derive(Debug, Clone)]
pub struct CreateTrainingParam {
    pub title: String,
    pub instructor_user_id: u64,
    pub conducted_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Parameters for amending a training record.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrainingParam {
    pub title: Option<String>,
    pub location: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}
