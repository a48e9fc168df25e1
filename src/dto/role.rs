use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RoleDto {
    pub role_id: u64,
    pub name: String,
    pub position: i32,
    /// Dotted permission names granted to this role.
    pub permissions: Vec<String>,
}
