use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TreasuryAccountDto {
    pub id: i32,
    pub name: String,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TreasuryTransactionDto {
    pub id: i32,
    pub account_id: i32,
    pub amount: i64,
    pub kind: String,
    pub memo: Option<String>,
    pub actor_user_id: u64,
    pub created_at: DateTime<Utc>,
}
