//! Route access guards.
//!
//! Controllers construct an `AuthGuard` per request and declare the access
//! the route needs. The guard resolves the session user, loads their cached
//! permission set, and checks every requirement; admins bypass permission,
//! role, and rank checks.

use std::sync::Arc;

use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::permission::{PermissionResolver, PermissionSet},
    state::AppState,
};

/// One access requirement on a route.
pub enum Access {
    /// Requires a dotted permission name, e.g. `leadership.view`.
    Permission(&'static str),
    /// Requires holding a Discord role by display name.
    Role(&'static str),
    /// Requires an active employee record at or above this rank level.
    MinRank(i32),
    /// Requires the user admin flag.
    Admin,
}

/// The authenticated caller, as seen by controllers after the guard passes.
pub struct Actor {
    pub user: User,
    pub permissions: Arc<PermissionSet>,
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, session: &'a Session) -> Self {
        Self { state, session }
    }

    /// Resolves the session user and checks every access requirement.
    ///
    /// An empty requirement slice means "any logged-in user".
    pub async fn require(&self, access: &[Access]) -> Result<Actor, AppError> {
        let user_repo = UserRepository::new(&self.state.db);
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let permissions = self.resolver().resolve(&self.state.db, user_id).await?;

        for requirement in access {
            self.check(&user, &permissions, requirement)?;
        }

        Ok(Actor { user, permissions })
    }

    fn check(
        &self,
        user: &User,
        permissions: &PermissionSet,
        requirement: &Access,
    ) -> Result<(), AppError> {
        // Admins pass every gate.
        if user.admin {
            return Ok(());
        }

        let denial = match requirement {
            Access::Permission(name) => (!permissions.has_permission(name))
                .then(|| format!("missing permission '{}'", name)),
            Access::Role(name) => {
                (!permissions.has_role(name)).then(|| format!("missing role '{}'", name))
            }
            Access::MinRank(level) => (!permissions.meets_rank(*level))
                .then(|| format!("rank below required level {}", level)),
            Access::Admin => Some("admin flag required".to_string()),
        };

        match denial {
            Some(reason) => Err(AuthError::AccessDenied(user.discord_id, reason).into()),
            None => Ok(()),
        }
    }

    fn resolver(&self) -> &PermissionResolver {
        &self.state.permissions
    }
}
