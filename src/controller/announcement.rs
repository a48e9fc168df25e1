//! Announcement endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    data::{announcement::AnnouncementRepository, audit::AuditLogRepository},
    dto::api::PageQuery,
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::announcement::{CreateAnnouncementParam, UpdateAnnouncementParam},
    realtime::hub::EventAction,
    state::AppState,
};

#[derive(Serialize)]
struct AnnouncementPageDto {
    announcements: Vec<crate::dto::announcement::AnnouncementDto>,
    total: u64,
}

/// GET /api/announcements - List announcements, pinned first
pub async fn get_announcements(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let (announcements, total) = AnnouncementRepository::new(&state.db)
        .get_paginated(page.page, page.per_page)
        .await?;

    let dto = AnnouncementPageDto {
        announcements: announcements.into_iter().map(|a| a.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct CreateAnnouncementBody {
    pub title: String,
    pub body: String,
}

/// POST /api/announcements - Publish an announcement
pub async fn create_announcement(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateAnnouncementBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("announcements.manage")])
        .await?;

    let announcement = AnnouncementRepository::new(&state.db)
        .create(CreateAnnouncementParam {
            title: body.title,
            body: body.body,
            author_user_id: actor.user.discord_id,
        })
        .await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "announcement.create",
            "announcement",
            Some(announcement.id.to_string()),
            None,
        )
        .await?;

    let dto = announcement.into_dto();
    state
        .realtime
        .publish("announcement", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

#[derive(Deserialize)]
pub struct UpdateAnnouncementBody {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// PATCH /api/announcements/{id} - Edit an announcement
pub async fn update_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdateAnnouncementBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("announcements.manage")])
        .await?;

    let Some(announcement) = AnnouncementRepository::new(&state.db)
        .update(
            id,
            UpdateAnnouncementParam {
                title: body.title,
                body: body.body,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Announcement not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "announcement.update",
            "announcement",
            Some(id.to_string()),
            None,
        )
        .await?;

    let dto = announcement.into_dto();
    state
        .realtime
        .publish("announcement", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct PinBody {
    pub pinned: bool,
}

/// POST /api/announcements/{id}/pin - Pin or unpin an announcement
pub async fn pin_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<PinBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("announcements.manage")])
        .await?;

    let Some(announcement) = AnnouncementRepository::new(&state.db)
        .set_pinned(id, body.pinned)
        .await?
    else {
        return Err(AppError::NotFound("Announcement not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "announcement.pin",
            "announcement",
            Some(id.to_string()),
            Some(serde_json::json!({ "pinned": body.pinned })),
        )
        .await?;

    let dto = announcement.into_dto();
    state
        .realtime
        .publish("announcement", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// DELETE /api/announcements/{id} - Remove an announcement
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("announcements.manage")])
        .await?;

    if !AnnouncementRepository::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Announcement not found".to_string()));
    }

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "announcement.delete",
            "announcement",
            Some(id.to_string()),
            None,
        )
        .await?;

    state
        .realtime
        .publish("announcement", EventAction::Deleted, &serde_json::json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}
