use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct InvestigationDto {
    pub id: i32,
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub lead_user_id: u64,
    pub subject_employee_id: Option<i32>,
    pub status: String,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct EvidenceDto {
    pub id: i32,
    pub investigation_id: i32,
    pub label: String,
    pub description: Option<String>,
    pub storage_ref: Option<String>,
    pub added_by: u64,
    pub added_at: DateTime<Utc>,
}
