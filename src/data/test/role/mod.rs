use crate::{
    data::role::{DiscordRoleRepository, RolePermissionRepository, UserRoleRepository},
    error::AppError,
    model::role::UpsertRoleParam,
};
use test_utils::{
    builder::TestBuilder,
    factory::role::{create_role, grant_permission},
};

mod set_permissions;
mod set_user_roles;
