//! Discord role factory and grant helpers.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: String,
    guild_id: String,
    name: String,
    position: i32,
}

impl<'a> RoleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            role_id: id.to_string(),
            guild_id: "1".to_string(),
            name: format!("Role {}", id),
            position: 0,
        }
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub async fn build(self) -> Result<entity::discord_role::Model, DbErr> {
        entity::discord_role::ActiveModel {
            role_id: ActiveValue::Set(self.role_id),
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(self.position),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::discord_role::Model, DbErr> {
    RoleFactory::new(db).build().await
}

/// Assigns a user to a role.
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
    role_id: impl Into<String>,
) -> Result<(), DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id.into()),
        role_id: ActiveValue::Set(role_id.into()),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Grants a permission name to a role.
pub async fn grant_permission(
    db: &DatabaseConnection,
    role_id: impl Into<String>,
    permission: impl Into<String>,
) -> Result<(), DbErr> {
    entity::role_permission::ActiveModel {
        role_id: ActiveValue::Set(role_id.into()),
        permission: ActiveValue::Set(permission.into()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(())
}
