use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TrainingDto {
    pub id: i32,
    pub title: String,
    pub instructor_user_id: u64,
    pub conducted_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TrainingAttendeeDto {
    pub employee_id: i32,
    pub passed: bool,
}
