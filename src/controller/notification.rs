//! Notification endpoints. All operate on the authenticated user's own rows.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tower_sessions::Session;

use crate::{
    data::notification::NotificationRepository,
    dto::api::PageQuery,
    error::AppError,
    middleware::auth::AuthGuard,
    state::AppState,
};

#[derive(Serialize)]
struct NotificationPageDto {
    notifications: Vec<crate::dto::notification::NotificationDto>,
    total: u64,
}

/// GET /api/notifications - List the caller's notifications
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session).require(&[]).await?;

    let (notifications, total) = NotificationRepository::new(&state.db)
        .get_for_user(actor.user.discord_id, page.page, page.per_page)
        .await?;

    let dto = NotificationPageDto {
        notifications: notifications.into_iter().map(|n| n.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/notifications/{id}/read - Mark one notification read
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session).require(&[]).await?;

    let updated = NotificationRepository::new(&state.db)
        .mark_read(id, actor.user.discord_id)
        .await?;

    if !updated {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/notifications/read-all - Mark all of the caller's notifications read
pub async fn mark_all_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session).require(&[]).await?;

    NotificationRepository::new(&state.db)
        .mark_all_read(actor.user.discord_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
