//! Sanction endpoints.
//!
//! Issuing a sanction accrues a bonus for the issuing officer and notifies
//! the sanctioned employee.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    data::{
        audit::AuditLogRepository, employee::EmployeeRepository, sanction::SanctionRepository,
    },
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::{
        bonus::BonusKind,
        sanction::{CreateSanctionParam, SanctionKind, UpdateSanctionParam},
    },
    realtime::hub::EventAction,
    service::{accrual::AccrualService, notify::NotifyService},
    state::AppState,
};

#[derive(Deserialize)]
pub struct SanctionListQuery {
    pub employee_id: Option<i32>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    25
}

#[derive(Serialize)]
struct SanctionPageDto {
    sanctions: Vec<crate::dto::sanction::SanctionDto>,
    total: u64,
}

/// GET /api/sanctions - List sanctions, optionally for one employee
pub async fn get_sanctions(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SanctionListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("sanctions.view")])
        .await?;

    let (sanctions, total) = SanctionRepository::new(&state.db)
        .get_paginated(query.employee_id, query.page, query.per_page)
        .await?;

    let dto = SanctionPageDto {
        sanctions: sanctions.into_iter().map(|s| s.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/sanctions/{id} - Get one sanction
pub async fn get_sanction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("sanctions.view")])
        .await?;

    let Some(sanction) = SanctionRepository::new(&state.db).find_by_id(id).await? else {
        return Err(AppError::NotFound("Sanction not found".to_string()));
    };

    Ok((StatusCode::OK, Json(sanction.into_dto())))
}

#[derive(Deserialize)]
pub struct CreateSanctionBody {
    pub employee_id: i32,
    pub kind: String,
    pub reason: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// POST /api/sanctions - Issue a sanction
pub async fn create_sanction(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateSanctionBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("sanctions.manage")])
        .await?;

    let kind = SanctionKind::parse(&body.kind)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown sanction kind '{}'", body.kind)))?;

    let employee_repo = EmployeeRepository::new(&state.db);
    let Some(employee) = employee_repo.find_by_id(body.employee_id).await? else {
        return Err(AppError::NotFound("Employee not found".to_string()));
    };

    let sanction = SanctionRepository::new(&state.db)
        .create(CreateSanctionParam {
            employee_id: body.employee_id,
            issued_by: actor.user.discord_id,
            kind,
            reason: body.reason.clone(),
            expires_at: body.expires_at,
        })
        .await?;

    // The issuing officer earns the accrual, when they are an active employee.
    if let Some(issuer) = employee_repo.find_by_user_id(actor.user.discord_id).await? {
        AccrualService::new(&state.db)
            .record(issuer.id, BonusKind::SanctionIssued)
            .await?;
    }

    NotifyService::new(&state.db, &state.realtime)
        .send(
            employee.user_id,
            format!("You received a {}", kind.as_str()),
            body.reason.clone(),
        )
        .await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "sanction.create",
            "sanction",
            Some(sanction.id.to_string()),
            Some(serde_json::json!({
                "employee_id": body.employee_id,
                "kind": kind.as_str(),
            })),
        )
        .await?;

    let dto = sanction.into_dto();
    state.realtime.publish("sanction", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

#[derive(Deserialize)]
pub struct UpdateSanctionBody {
    pub reason: Option<String>,
    pub expires_at: Option<Option<DateTime<Utc>>>,
}

/// PATCH /api/sanctions/{id} - Amend a sanction
pub async fn update_sanction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdateSanctionBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("sanctions.manage")])
        .await?;

    let Some(sanction) = SanctionRepository::new(&state.db)
        .update(
            id,
            UpdateSanctionParam {
                reason: body.reason,
                expires_at: body.expires_at,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Sanction not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "sanction.update",
            "sanction",
            Some(id.to_string()),
            None,
        )
        .await?;

    let dto = sanction.into_dto();
    state.realtime.publish("sanction", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// DELETE /api/sanctions/{id} - Remove a sanction
pub async fn delete_sanction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("sanctions.manage")])
        .await?;

    if !SanctionRepository::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Sanction not found".to_string()));
    }

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "sanction.delete",
            "sanction",
            Some(id.to_string()),
            None,
        )
        .await?;

    state
        .realtime
        .publish("sanction", EventAction::Deleted, &serde_json::json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}
