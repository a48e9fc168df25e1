//! Discord gateway event handler.
//!
//! Mirrors role changes into the database, keeps employee records current on
//! member events, and triggers a full roster reconciliation when the guild
//! comes up. Events from guilds other than the configured one are ignored.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildId, GuildMemberUpdateEvent, Member, Ready, Role, RoleId,
    User,
};
use serenity::async_trait;

use crate::{
    data::{
        employee::EmployeeRepository,
        role::{DiscordRoleRepository, UserRoleRepository},
    },
    model::{
        employee::{EmployeeStatus, UpdateEmployeeParam},
        role::UpsertRoleParam,
    },
    service::{permission::PermissionResolver, roster::RosterSyncService},
};

/// Discord bot event handler
pub struct Handler {
    db: DatabaseConnection,
    guild_id: u64,
    permissions: PermissionResolver,
}

impl Handler {
    pub fn new(db: DatabaseConnection, guild_id: u64, permissions: PermissionResolver) -> Self {
        Self {
            db,
            guild_id,
            permissions,
        }
    }

    fn is_department_guild(&self, guild_id: GuildId) -> bool {
        guild_id.get() == self.guild_id
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);
    }

    /// Called when a guild becomes available or the bot joins a new guild.
    ///
    /// Runs a full roster reconciliation to catch any member or role changes
    /// missed while the bot was offline.
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        if !self.is_department_guild(guild.id) {
            tracing::debug!("Ignoring guild_create for foreign guild {}", guild.id);
            return;
        }

        tracing::info!(
            "Department guild available: {} ({}), member_count: {}",
            guild.name,
            guild.id,
            guild.member_count
        );

        let sync_service = RosterSyncService::new(&self.db);
        if let Err(e) = sync_service.sync_guild(&ctx.http, self.guild_id).await {
            tracing::error!("Initial roster sync failed: {:?}", e);
        }

        self.permissions.invalidate_all();
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, _ctx: Context, new: Role) {
        if !self.is_department_guild(new.guild_id) {
            return;
        }

        let role_repo = DiscordRoleRepository::new(&self.db);
        let param = UpsertRoleParam {
            role_id: new.id.get(),
            guild_id: new.guild_id.get(),
            name: new.name.clone(),
            position: new.position as i32,
        };

        if let Err(e) = role_repo.upsert(param).await {
            tracing::error!("Failed to upsert new role: {:?}", e);
        } else {
            tracing::info!("Created role {} in guild {}", new.name, new.guild_id);
        }
    }

    /// Called when a role is updated in a guild.
    ///
    /// A rename can change a role's rank or department meaning, so the
    /// permission cache is dropped along with the mirror update.
    async fn guild_role_update(&self, _ctx: Context, _old: Option<Role>, new: Role) {
        if !self.is_department_guild(new.guild_id) {
            return;
        }

        let role_repo = DiscordRoleRepository::new(&self.db);
        let param = UpsertRoleParam {
            role_id: new.id.get(),
            guild_id: new.guild_id.get(),
            name: new.name.clone(),
            position: new.position as i32,
        };

        if let Err(e) = role_repo.upsert(param).await {
            tracing::error!("Failed to upsert updated role: {:?}", e);
        } else {
            tracing::info!("Updated role {} in guild {}", new.name, new.guild_id);
            self.permissions.invalidate_all();
        }
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        _removed_role_data_if_in_cache: Option<Role>,
    ) {
        if !self.is_department_guild(guild_id) {
            return;
        }

        let role_repo = DiscordRoleRepository::new(&self.db);

        if let Err(e) = role_repo.delete(removed_role_id.get()).await {
            tracing::error!("Failed to delete role: {:?}", e);
        } else {
            tracing::info!("Deleted role {} from guild {}", removed_role_id, guild_id);
            self.permissions.invalidate_all();
        }
    }

    /// Called when a member joins the guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        if !self.is_department_guild(new_member.guild_id) {
            return;
        }

        let sync_service = RosterSyncService::new(&self.db);
        if let Err(e) = sync_service
            .sync_member(&ctx.http, self.guild_id, &new_member)
            .await
        {
            tracing::error!(
                "Failed to sync joining member {}: {:?}",
                new_member.user.id,
                e
            );
        }

        self.permissions.invalidate(new_member.user.id.get()).await;
    }

    /// Called when a member's roles or nickname change
    async fn guild_member_update(
        &self,
        ctx: Context,
        _old_if_available: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        if !self.is_department_guild(event.guild_id) {
            return;
        }

        // The full member payload may be missing when the cache is cold;
        // fall back to fetching it.
        let member = match new {
            Some(member) => member,
            None => match ctx.http.get_member(event.guild_id, event.user.id).await {
                Ok(member) => member,
                Err(e) => {
                    tracing::error!("Failed to fetch updated member {}: {:?}", event.user.id, e);
                    return;
                }
            },
        };

        let sync_service = RosterSyncService::new(&self.db);
        if let Err(e) = sync_service
            .sync_member(&ctx.http, self.guild_id, &member)
            .await
        {
            tracing::error!("Failed to sync updated member {}: {:?}", member.user.id, e);
        }

        self.permissions.invalidate(member.user.id.get()).await;
    }

    /// Called when a member leaves the guild.
    ///
    /// The employee record is kept but marked inactive, and the member's
    /// role memberships are dropped.
    async fn guild_member_removal(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        user: User,
        _member_data_if_available: Option<Member>,
    ) {
        if !self.is_department_guild(guild_id) {
            return;
        }

        let user_id = user.id.get();

        let employee_repo = EmployeeRepository::new(&self.db);
        match employee_repo.find_by_user_id(user_id).await {
            Ok(Some(employee)) => {
                if let Err(e) = employee_repo
                    .update(
                        employee.id,
                        UpdateEmployeeParam {
                            status: Some(EmployeeStatus::Inactive),
                            ..Default::default()
                        },
                    )
                    .await
                {
                    tracing::error!("Failed to deactivate employee {}: {:?}", employee.id, e);
                } else {
                    tracing::info!(
                        "Member {} left the guild, employee {} deactivated",
                        user_id,
                        employee.id
                    );
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Failed to look up employee for {}: {:?}", user_id, e);
            }
        }

        if let Err(e) = UserRoleRepository::new(&self.db).delete_by_user(user_id).await {
            tracing::error!("Failed to drop role memberships for {}: {:?}", user_id, e);
        }

        self.permissions.invalidate(user_id).await;
    }
}
