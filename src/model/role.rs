//! Mirrored Discord role domain model.

use crate::{dto::role::RoleDto, error::AppError, util::parse::parse_u64_from_string};

/// A Discord guild role mirrored into the database, with its permission grants.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    pub role_id: u64,
    pub guild_id: u64,
    pub name: String,
    pub position: i32,
    pub permissions: Vec<String>,
}

impl GuildRole {
    pub fn from_entity(
        entity: entity::discord_role::Model,
        permissions: Vec<String>,
    ) -> Result<Self, AppError> {
        let role_id = parse_u64_from_string(entity.role_id)?;
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            role_id,
            guild_id,
            name: entity.name,
            position: entity.position,
            permissions,
        })
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            role_id: self.role_id,
            name: self.name,
            position: self.position,
            permissions: self.permissions,
        }
    }
}

/// Parameters for mirroring a role from a gateway event or roster pull.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertRoleParam {
    pub role_id: u64,
    pub guild_id: u64,
    pub name: String,
    pub position: i32,
}
