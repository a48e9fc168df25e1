//! Discord role mirror, user-role membership, and permission grant repositories.
//!
//! Role rows are written by the gateway bot and the roster synchronizer;
//! permission grants are managed by admins through the API. All three tables
//! feed the permission resolver.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::role::{GuildRole, UpsertRoleParam},
};

/// Repository for the mirrored Discord role table.
pub struct DiscordRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a mirrored role.
    pub async fn upsert(&self, param: UpsertRoleParam) -> Result<(), AppError> {
        entity::prelude::DiscordRole::insert(entity::discord_role::ActiveModel {
            role_id: ActiveValue::Set(param.role_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            position: ActiveValue::Set(param.position),
        })
        .on_conflict(
            OnConflict::column(entity::discord_role::Column::RoleId)
                .update_columns([
                    entity::discord_role::Column::Name,
                    entity::discord_role::Column::Position,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;
        Ok(())
    }

    /// Deletes a mirrored role. Cascades to memberships and grants.
    pub async fn delete(&self, role_id: u64) -> Result<(), AppError> {
        entity::prelude::DiscordRole::delete_many()
            .filter(entity::discord_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all mirrored roles with their permission grants, highest position first.
    pub async fn get_all(&self) -> Result<Vec<GuildRole>, AppError> {
        let roles = entity::prelude::DiscordRole::find()
            .order_by_desc(entity::discord_role::Column::Position)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(roles.len());
        for role in roles {
            let grants = entity::prelude::RolePermission::find()
                .filter(entity::role_permission::Column::RoleId.eq(role.role_id.as_str()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| g.permission)
                .collect();
            result.push(GuildRole::from_entity(role, grants)?);
        }

        Ok(result)
    }

    /// Finds a single mirrored role with its grants.
    pub async fn find_by_role_id(&self, role_id: u64) -> Result<Option<GuildRole>, AppError> {
        let Some(role) = entity::prelude::DiscordRole::find_by_id(role_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let grants = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::RoleId.eq(role.role_id.as_str()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| g.permission)
            .collect();

        Ok(Some(GuildRole::from_entity(role, grants)?))
    }

    /// Gets the display names of the given roles.
    pub async fn get_names(&self, role_ids: &[String]) -> Result<Vec<String>, AppError> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let roles = entity::prelude::DiscordRole::find()
            .filter(entity::discord_role::Column::RoleId.is_in(role_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(roles.into_iter().map(|r| r.name).collect())
    }
}

/// Repository for user-to-role memberships.
pub struct UserRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces a user's role memberships with the given set.
    pub async fn set_user_roles(&self, user_id: u64, role_ids: &[u64]) -> Result<(), AppError> {
        let user_id_str = user_id.to_string();

        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id_str.as_str()))
            .exec(self.db)
            .await?;

        if role_ids.is_empty() {
            return Ok(());
        }

        let rows: Vec<entity::user_role::ActiveModel> = role_ids
            .iter()
            .map(|role_id| entity::user_role::ActiveModel {
                user_id: ActiveValue::Set(user_id_str.clone()),
                role_id: ActiveValue::Set(role_id.to_string()),
            })
            .collect();

        entity::prelude::UserRole::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the role IDs a user currently holds.
    pub async fn get_role_ids_for_user(&self, user_id: u64) -> Result<Vec<String>, AppError> {
        let rows = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id.to_string()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.role_id).collect())
    }

    /// Removes all role memberships for a user. Called when a member leaves.
    pub async fn delete_by_user(&self, user_id: u64) -> Result<(), AppError> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}

/// Repository for permission grants on roles.
pub struct RolePermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RolePermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Replaces the permission grants of a role with the given set.
    pub async fn set_permissions(
        &self,
        role_id: u64,
        permissions: &[String],
    ) -> Result<(), AppError> {
        let role_id_str = role_id.to_string();

        entity::prelude::RolePermission::delete_many()
            .filter(entity::role_permission::Column::RoleId.eq(role_id_str.as_str()))
            .exec(self.db)
            .await?;

        if permissions.is_empty() {
            return Ok(());
        }

        let rows: Vec<entity::role_permission::ActiveModel> = permissions
            .iter()
            .map(|permission| entity::role_permission::ActiveModel {
                role_id: ActiveValue::Set(role_id_str.clone()),
                permission: ActiveValue::Set(permission.clone()),
                ..Default::default()
            })
            .collect();

        entity::prelude::RolePermission::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the union of permission names granted to any of the given roles.
    pub async fn get_for_roles(&self, role_ids: &[String]) -> Result<Vec<String>, AppError> {
        if role_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::RolePermission::find()
            .filter(entity::role_permission::Column::RoleId.is_in(role_ids.to_vec()))
            .all(self.db)
            .await?;

        let mut permissions: Vec<String> = rows.into_iter().map(|r| r.permission).collect();
        permissions.sort();
        permissions.dedup();

        Ok(permissions)
    }
}
