//! Role and permission-grant administration endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{
        audit::AuditLogRepository,
        role::{DiscordRoleRepository, RolePermissionRepository},
    },
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    state::AppState,
};

/// GET /api/roles - List mirrored guild roles with their grants (admin)
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Admin])
        .await?;

    let roles = DiscordRoleRepository::new(&state.db).get_all().await?;
    let dto: Vec<_> = roles.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct SetPermissionsBody {
    pub permissions: Vec<String>,
}

/// PUT /api/roles/{role_id}/permissions - Replace a role's grants (admin)
///
/// Every cached permission set may reference the role, so the whole
/// permission cache is dropped afterwards.
pub async fn set_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(role_id): Path<u64>,
    Json(body): Json<SetPermissionsBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Admin])
        .await?;

    let role_repo = DiscordRoleRepository::new(&state.db);
    let Some(role) = role_repo.find_by_role_id(role_id).await? else {
        return Err(AppError::NotFound("Role not found".to_string()));
    };

    RolePermissionRepository::new(&state.db)
        .set_permissions(role_id, &body.permissions)
        .await?;

    state.permissions.invalidate_all();

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "role.set_permissions",
            "role",
            Some(role_id.to_string()),
            Some(serde_json::json!({
                "role": role.name,
                "permissions": body.permissions,
            })),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
