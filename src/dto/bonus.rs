use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct BonusPaymentDto {
    pub id: i32,
    pub employee_id: i32,
    pub kind: String,
    pub amount: i64,
    pub week_start: NaiveDate,
    pub submitted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct WorkLogDto {
    pub employee_id: i32,
    pub week_start: NaiveDate,
    pub cases_opened: i32,
    pub cases_closed: i32,
    pub sanctions_issued: i32,
    pub trainings_held: i32,
}
