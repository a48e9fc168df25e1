use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct EmployeeDto {
    pub id: i32,
    pub user_id: u64,
    pub badge_number: Option<String>,
    pub name: String,
    pub rank_level: i32,
    pub status: String,
    pub departments: Vec<String>,
    pub hired_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedEmployeesDto {
    pub employees: Vec<EmployeeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
