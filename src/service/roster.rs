//! Guild roster synchronization.
//!
//! Pulls the full member list of the configured guild from the Discord HTTP
//! API, parses rank and department from role display names, and reconciles
//! the employee table against the snapshot in a single pass. Runs at bot
//! startup (`guild_create`) and on an hourly schedule.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use sea_orm::DatabaseConnection;
use serenity::all::{GuildId, Member};
use serenity::http::Http;

use crate::{
    data::{
        employee::EmployeeRepository,
        role::{DiscordRoleRepository, UserRoleRepository},
        user::UserRepository,
    },
    error::AppError,
    model::{
        employee::{EmployeeStatus, RosterUpsertParam, UpdateEmployeeParam},
        role::UpsertRoleParam,
        user::UpsertUserParam,
    },
};

/// Highest rank level a role name may carry.
pub const MAX_RANK_LEVEL: i32 = 17;

/// Discord page size for the guild member list endpoint.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Role display name to department code. Role names must match exactly;
/// anything else is not a department role.
const DEPARTMENT_ROLES: [(&str, &str); 7] = [
    ("Patrol Division", "patrol"),
    ("Detective Bureau", "detectives"),
    ("Internal Affairs", "ia"),
    ("Special Weapons and Tactics", "swat"),
    ("Traffic Enforcement", "traffic"),
    ("Police Academy", "academy"),
    ("Human Resources", "hr"),
];

/// Matches rank role names of the form `[NN] Title`, e.g. `[07] Sergeant I`.
fn rank_role_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[(\d{1,2})\]\s+.+$").expect("rank role regex is valid"))
}

/// Parses a role display name into a rank level.
///
/// Returns None for names that don't match the `[NN] Title` format or carry
/// a level outside 1-17.
pub fn parse_rank_role(name: &str) -> Option<i32> {
    let captures = rank_role_regex().captures(name)?;
    let level: i32 = captures.get(1)?.as_str().parse().ok()?;

    (1..=MAX_RANK_LEVEL).contains(&level).then_some(level)
}

/// Maps a role display name to a department code via the static lookup table.
pub fn department_for_role(name: &str) -> Option<&'static str> {
    DEPARTMENT_ROLES
        .iter()
        .find(|(role_name, _)| *role_name == name)
        .map(|(_, code)| *code)
}

/// Derives an employee profile from a member's role names.
///
/// The rank is the highest level among the member's rank roles; departments
/// are the union of matching department roles. Members without any rank role
/// are not employees and yield None.
pub fn extract_member_profile(role_names: &[String]) -> Option<(i32, Vec<String>)> {
    let rank = role_names
        .iter()
        .filter_map(|name| parse_rank_role(name))
        .max()?;

    let mut departments: Vec<String> = role_names
        .iter()
        .filter_map(|name| department_for_role(name))
        .map(String::from)
        .collect();
    departments.sort();
    departments.dedup();

    Some((rank, departments))
}

/// Display name preference: guild nickname, then global name, then username.
fn member_display_name(member: &Member) -> String {
    member
        .nick
        .clone()
        .or_else(|| member.user.global_name.clone())
        .unwrap_or_else(|| member.user.name.clone())
}

/// Result of one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterSyncOutcome {
    /// Members upserted as employees.
    pub synced: usize,
    /// Employees marked inactive because they left the roster.
    pub deactivated: u64,
}

/// Service reconciling employee records against the live guild roster.
pub struct RosterSyncService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a full reconciliation pass over the guild's member list.
    ///
    /// Mirrors the guild's roles, upserts an employee (and backing user row)
    /// for every member holding a rank role, replaces role memberships, and
    /// finally marks employees absent from the snapshot inactive.
    pub async fn sync_guild(
        &self,
        http: &Http,
        guild_id: u64,
    ) -> Result<RosterSyncOutcome, AppError> {
        let guild = GuildId::new(guild_id);

        let roles = http.get_guild_roles(guild).await?;
        let roles_by_id: HashMap<u64, String> = roles
            .iter()
            .map(|role| (role.id.get(), role.name.clone()))
            .collect();

        self.mirror_roles(guild_id, &roles).await?;

        let members = self.fetch_all_members(http, guild).await?;
        tracing::debug!("Fetched {} members for guild {}", members.len(), guild_id);

        let mut active_user_ids = Vec::new();
        for member in &members {
            if self.sync_member_with_roles(member, &roles_by_id).await? {
                active_user_ids.push(member.user.id.get());
            }
        }

        let employee_repo = EmployeeRepository::new(self.db);
        let deactivated = employee_repo.mark_inactive_missing(&active_user_ids).await?;

        let outcome = RosterSyncOutcome {
            synced: active_user_ids.len(),
            deactivated,
        };

        tracing::info!(
            "Roster sync for guild {}: {} employees synced, {} deactivated",
            guild_id,
            outcome.synced,
            outcome.deactivated
        );

        Ok(outcome)
    }

    /// Reconciles a single member, e.g. from a gateway member-update event.
    ///
    /// Fetches the guild's roles to resolve names, then upserts or
    /// deactivates the matching employee record.
    pub async fn sync_member(
        &self,
        http: &Http,
        guild_id: u64,
        member: &Member,
    ) -> Result<(), AppError> {
        let roles = http.get_guild_roles(GuildId::new(guild_id)).await?;
        let roles_by_id: HashMap<u64, String> = roles
            .iter()
            .map(|role| (role.id.get(), role.name.clone()))
            .collect();

        self.sync_member_with_roles(member, &roles_by_id).await?;
        Ok(())
    }

    /// Pages through the guild member list endpoint until exhausted.
    async fn fetch_all_members(
        &self,
        http: &Http,
        guild: GuildId,
    ) -> Result<Vec<Member>, AppError> {
        let mut members = Vec::new();
        let mut after: Option<u64> = None;

        loop {
            let batch = http
                .get_guild_members(guild, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let batch_len = batch.len() as u64;
            after = batch.last().map(|m| m.user.id.get());
            members.extend(batch);

            if batch_len < MEMBER_PAGE_SIZE {
                break;
            }
        }

        Ok(members)
    }

    /// Upserts the mirrored role table and prunes roles the guild dropped.
    async fn mirror_roles(
        &self,
        guild_id: u64,
        roles: &[serenity::all::Role],
    ) -> Result<(), AppError> {
        let role_repo = DiscordRoleRepository::new(self.db);

        for role in roles {
            role_repo
                .upsert(UpsertRoleParam {
                    role_id: role.id.get(),
                    guild_id,
                    name: role.name.clone(),
                    position: role.position as i32,
                })
                .await?;
        }

        let live_ids: Vec<u64> = roles.iter().map(|r| r.id.get()).collect();
        for mirrored in role_repo.get_all().await? {
            if !live_ids.contains(&mirrored.role_id) {
                role_repo.delete(mirrored.role_id).await?;
            }
        }

        Ok(())
    }

    /// Processes one member against a resolved role-name map.
    ///
    /// Returns whether the member holds a rank role (i.e. is an employee).
    async fn sync_member_with_roles(
        &self,
        member: &Member,
        roles_by_id: &HashMap<u64, String>,
    ) -> Result<bool, AppError> {
        let user_id = member.user.id.get();

        // Bot accounts never become employees.
        if member.user.bot {
            return Ok(false);
        }

        let role_names: Vec<String> = member
            .roles
            .iter()
            .filter_map(|role_id| roles_by_id.get(&role_id.get()).cloned())
            .collect();

        let Some((rank_level, departments)) = extract_member_profile(&role_names) else {
            // Not (or no longer) a rank holder: deactivate any existing record.
            let employee_repo = EmployeeRepository::new(self.db);
            if let Some(employee) = employee_repo.find_by_user_id(user_id).await? {
                employee_repo
                    .update(
                        employee.id,
                        UpdateEmployeeParam {
                            status: Some(EmployeeStatus::Inactive),
                            ..Default::default()
                        },
                    )
                    .await?;
            }
            return Ok(false);
        };

        let name = member_display_name(member);

        // The user row backs the employee's foreign keys; members who never
        // logged in still get one.
        let user_repo = UserRepository::new(self.db);
        user_repo
            .upsert(UpsertUserParam {
                discord_id: user_id,
                name: member.user.name.clone(),
                is_admin: None,
            })
            .await?;

        let employee_repo = EmployeeRepository::new(self.db);
        employee_repo
            .upsert_from_roster(RosterUpsertParam {
                user_id,
                name,
                rank_level,
                departments,
            })
            .await?;

        let role_ids: Vec<u64> = member
            .roles
            .iter()
            .map(|role_id| role_id.get())
            .filter(|id| roles_by_id.contains_key(id))
            .collect();
        UserRoleRepository::new(self.db)
            .set_user_roles(user_id, &role_ids)
            .await?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rank_role_with_level_and_title() {
        assert_eq!(parse_rank_role("[07] Sergeant I"), Some(7));
        assert_eq!(parse_rank_role("[17] Chief of Police"), Some(17));
        assert_eq!(parse_rank_role("[1] Cadet"), Some(1));
    }

    #[test]
    fn rejects_rank_levels_outside_range() {
        assert_eq!(parse_rank_role("[0] Nobody"), None);
        assert_eq!(parse_rank_role("[18] Overchief"), None);
        assert_eq!(parse_rank_role("[99] Superintendent"), None);
    }

    #[test]
    fn rejects_non_rank_role_names() {
        assert_eq!(parse_rank_role("Patrol Division"), None);
        assert_eq!(parse_rank_role("Sergeant [07]"), None);
        assert_eq!(parse_rank_role("[07]Sergeant"), None);
        assert_eq!(parse_rank_role(""), None);
    }

    #[test]
    fn maps_department_roles_by_exact_name() {
        assert_eq!(department_for_role("Patrol Division"), Some("patrol"));
        assert_eq!(department_for_role("Internal Affairs"), Some("ia"));
        assert_eq!(department_for_role("patrol division"), None);
        assert_eq!(department_for_role("Motor Pool"), None);
    }

    #[test]
    fn profile_takes_highest_rank_and_unions_departments() {
        let roles = vec![
            "[03] Officer II".to_string(),
            "[07] Sergeant I".to_string(),
            "Patrol Division".to_string(),
            "Traffic Enforcement".to_string(),
            "Patrol Division".to_string(),
        ];

        let (rank, departments) = extract_member_profile(&roles).unwrap();
        assert_eq!(rank, 7);
        assert_eq!(departments, vec!["patrol".to_string(), "traffic".to_string()]);
    }

    #[test]
    fn profile_requires_a_rank_role() {
        let roles = vec!["Patrol Division".to_string(), "Nitro".to_string()];
        assert_eq!(extract_member_profile(&roles), None);
    }
}
