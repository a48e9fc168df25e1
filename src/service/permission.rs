//! Aggregated permission sets with a short-lived in-memory cache.
//!
//! A user's effective access is the union of the permission names granted to
//! the Discord roles they hold, plus the role names themselves and the rank
//! level of their active employee record. Resolution hits three tables, so
//! sets are cached for a short TTL keyed by user id and invalidated whenever
//! a role's grants change.

use std::{collections::HashSet, sync::Arc, time::Duration};

use moka::future::Cache;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        employee::EmployeeRepository,
        role::{DiscordRoleRepository, RolePermissionRepository, UserRoleRepository},
    },
    error::AppError,
    model::employee::EmployeeStatus,
};

/// How long a resolved permission set stays fresh.
const PERMISSION_CACHE_TTL: Duration = Duration::from_secs(60);

const PERMISSION_CACHE_CAPACITY: u64 = 10_000;

/// A user's aggregated access: permission names, role names, and rank level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermissionSet {
    /// Union of dotted permission names over the user's roles.
    pub permissions: HashSet<String>,
    /// Display names of the roles the user holds.
    pub roles: HashSet<String>,
    /// Rank level of the user's employee record, when active.
    pub rank_level: Option<i32>,
}

impl PermissionSet {
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.contains(name)
    }

    pub fn has_role(&self, name: &str) -> bool {
        self.roles.contains(name)
    }

    pub fn meets_rank(&self, min_level: i32) -> bool {
        self.rank_level.is_some_and(|level| level >= min_level)
    }
}

/// Resolver loading and caching aggregated permission sets.
///
/// Cloning is cheap; the cache is shared between clones.
#[derive(Clone)]
pub struct PermissionResolver {
    cache: Cache<u64, Arc<PermissionSet>>,
}

impl Default for PermissionResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionResolver {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(PERMISSION_CACHE_CAPACITY)
                .time_to_live(PERMISSION_CACHE_TTL)
                .build(),
        }
    }

    /// Gets the user's permission set, loading it on cache miss.
    pub async fn resolve(
        &self,
        db: &DatabaseConnection,
        user_id: u64,
    ) -> Result<Arc<PermissionSet>, AppError> {
        if let Some(set) = self.cache.get(&user_id).await {
            return Ok(set);
        }

        let set = Arc::new(Self::load(db, user_id).await?);
        self.cache.insert(user_id, set.clone()).await;

        Ok(set)
    }

    /// Drops one user's cached set, forcing a reload on next resolve.
    pub async fn invalidate(&self, user_id: u64) {
        self.cache.invalidate(&user_id).await;
    }

    /// Drops every cached set. Called when a role's grants change, since any
    /// user holding that role is affected.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    async fn load(db: &DatabaseConnection, user_id: u64) -> Result<PermissionSet, AppError> {
        let user_role_repo = UserRoleRepository::new(db);
        let role_repo = DiscordRoleRepository::new(db);
        let grant_repo = RolePermissionRepository::new(db);
        let employee_repo = EmployeeRepository::new(db);

        let role_ids = user_role_repo.get_role_ids_for_user(user_id).await?;
        let roles: HashSet<String> = role_repo.get_names(&role_ids).await?.into_iter().collect();
        let permissions: HashSet<String> =
            grant_repo.get_for_roles(&role_ids).await?.into_iter().collect();

        // Suspended and inactive employees keep their records but lose
        // rank-gated access.
        let rank_level = employee_repo
            .find_by_user_id(user_id)
            .await?
            .filter(|e| e.status == EmployeeStatus::Active)
            .map(|e| e.rank_level);

        Ok(PermissionSet {
            permissions,
            roles,
            rank_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_utils::{
        builder::TestBuilder,
        factory::{
            employee::EmployeeFactory,
            role::{assign_role, create_role, grant_permission},
        },
    };

    fn tables() -> TestBuilder {
        TestBuilder::new()
            .with_employee_tables()
            .with_permission_tables()
    }

    #[tokio::test]
    async fn resolves_union_over_roles() -> Result<(), AppError> {
        let test = tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let a = create_role(db).await?;
        let b = create_role(db).await?;
        assign_role(db, "42", a.role_id.clone()).await?;
        assign_role(db, "42", b.role_id.clone()).await?;
        grant_permission(db, a.role_id, "employees.view").await?;
        grant_permission(db, b.role_id, "sanctions.manage").await?;

        let resolver = PermissionResolver::new();
        let set = resolver.resolve(db, 42).await?;

        assert!(set.has_permission("employees.view"));
        assert!(set.has_permission("sanctions.manage"));
        assert!(!set.has_permission("leadership.view"));
        assert_eq!(set.roles.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn rank_comes_from_active_employee_only() -> Result<(), AppError> {
        let test = tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        EmployeeFactory::new(db).user_id("42").rank_level(9).build().await?;
        EmployeeFactory::new(db)
            .user_id("99")
            .rank_level(12)
            .status("suspended")
            .build()
            .await?;

        let resolver = PermissionResolver::new();
        let active = resolver.resolve(db, 42).await?;
        let suspended = resolver.resolve(db, 99).await?;

        assert_eq!(active.rank_level, Some(9));
        assert!(active.meets_rank(9));
        assert!(!active.meets_rank(10));
        assert_eq!(suspended.rank_level, None);
        assert!(!suspended.meets_rank(1));

        Ok(())
    }

    #[tokio::test]
    async fn cached_set_survives_db_changes_until_invalidated() -> Result<(), AppError> {
        let test = tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let role = create_role(db).await?;
        assign_role(db, "42", role.role_id.clone()).await?;

        let resolver = PermissionResolver::new();
        let before = resolver.resolve(db, 42).await?;
        assert!(!before.has_permission("employees.view"));

        grant_permission(db, role.role_id, "employees.view").await?;

        // Still the cached set.
        let cached = resolver.resolve(db, 42).await?;
        assert!(!cached.has_permission("employees.view"));

        resolver.invalidate(42).await;
        let fresh = resolver.resolve(db, 42).await?;
        assert!(fresh.has_permission("employees.view"));

        Ok(())
    }
}
