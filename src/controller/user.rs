//! User administration endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{audit::AuditLogRepository, user::UserRepository},
    dto::{api::PageQuery, user::PaginatedUsersDto},
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    state::AppState,
};

/// GET /api/users - List all users (admin)
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Admin])
        .await?;

    let users = UserRepository::new(&state.db)
        .get_all_paginated(page.page, page.per_page)
        .await?;

    let dto = PaginatedUsersDto {
        users: users.users.into_iter().map(|u| u.into_dto()).collect(),
        total: users.total,
        page: users.page,
        per_page: users.per_page,
        total_pages: users.total_pages,
    };

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct SetAdminBody {
    pub admin: bool,
}

/// PUT /api/users/{discord_id}/admin - Grant or revoke the admin flag (admin)
pub async fn set_admin(
    State(state): State<AppState>,
    session: Session,
    Path(discord_id): Path<u64>,
    Json(body): Json<SetAdminBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Admin])
        .await?;

    let user_repo = UserRepository::new(&state.db);
    let Some(user) = user_repo.find_by_discord_id(discord_id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    user_repo.set_admin(discord_id, body.admin).await?;
    state.permissions.invalidate(discord_id).await;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "user.set_admin",
            "user",
            Some(discord_id.to_string()),
            Some(serde_json::json!({ "admin": body.admin, "name": user.name })),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
