use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RankDto {
    pub level: i32,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DepartmentDto {
    pub code: String,
    pub name: String,
}
