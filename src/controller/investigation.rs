//! Investigation and evidence endpoints.
//!
//! Opening and closing a case each accrue a bonus for the lead. Evidence is
//! nested under its investigation.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    data::{
        audit::AuditLogRepository,
        employee::EmployeeRepository,
        investigation::{EvidenceRepository, InvestigationRepository},
    },
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::{
        bonus::BonusKind,
        investigation::{
            AddEvidenceParam, CaseStatus, OpenInvestigationParam, UpdateInvestigationParam,
        },
    },
    realtime::hub::EventAction,
    service::accrual::AccrualService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct InvestigationListQuery {
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    25
}

#[derive(Serialize)]
struct InvestigationPageDto {
    investigations: Vec<crate::dto::investigation::InvestigationDto>,
    total: u64,
}

/// GET /api/investigations - List investigations, optionally by status
pub async fn get_investigations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<InvestigationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.view")])
        .await?;

    let status = query
        .status
        .as_deref()
        .map(|s| {
            CaseStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", s)))
        })
        .transpose()?;

    let (investigations, total) = InvestigationRepository::new(&state.db)
        .get_paginated(status, query.page, query.per_page)
        .await?;

    let dto = InvestigationPageDto {
        investigations: investigations.into_iter().map(|i| i.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/investigations/{id} - Get one investigation
pub async fn get_investigation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.view")])
        .await?;

    let Some(investigation) = InvestigationRepository::new(&state.db).find_by_id(id).await?
    else {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    };

    Ok((StatusCode::OK, Json(investigation.into_dto())))
}

#[derive(Deserialize)]
pub struct OpenInvestigationBody {
    pub title: String,
    pub description: Option<String>,
    pub subject_employee_id: Option<i32>,
}

/// POST /api/investigations - Open a new case
pub async fn open_investigation(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<OpenInvestigationBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.manage")])
        .await?;

    if let Some(subject_id) = body.subject_employee_id {
        if EmployeeRepository::new(&state.db)
            .find_by_id(subject_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Subject employee not found".to_string()));
        }
    }

    let case_number = generate_case_number();

    let investigation = InvestigationRepository::new(&state.db)
        .create(
            case_number,
            OpenInvestigationParam {
                title: body.title,
                description: body.description,
                lead_user_id: actor.user.discord_id,
                subject_employee_id: body.subject_employee_id,
            },
        )
        .await?;

    accrue_for_lead(&state, actor.user.discord_id, BonusKind::CaseOpened).await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "investigation.open",
            "investigation",
            Some(investigation.id.to_string()),
            Some(serde_json::json!({ "case_number": investigation.case_number })),
        )
        .await?;

    let dto = investigation.into_dto();
    state
        .realtime
        .publish("investigation", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

#[derive(Deserialize)]
pub struct UpdateInvestigationBody {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub subject_employee_id: Option<Option<i32>>,
}

/// PATCH /api/investigations/{id} - Amend an open case
pub async fn update_investigation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdateInvestigationBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.manage")])
        .await?;

    let repo = InvestigationRepository::new(&state.db);
    let Some(existing) = repo.find_by_id(id).await? else {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    };
    if existing.status == CaseStatus::Closed {
        return Err(AppError::BadRequest(
            "Closed investigations cannot be amended".to_string(),
        ));
    }

    let Some(investigation) = repo
        .update(
            id,
            UpdateInvestigationParam {
                title: body.title,
                description: body.description,
                subject_employee_id: body.subject_employee_id,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "investigation.update",
            "investigation",
            Some(id.to_string()),
            None,
        )
        .await?;

    let dto = investigation.into_dto();
    state
        .realtime
        .publish("investigation", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// POST /api/investigations/{id}/close - Close a case
pub async fn close_investigation(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.manage")])
        .await?;

    let repo = InvestigationRepository::new(&state.db);
    let Some(existing) = repo.find_by_id(id).await? else {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    };
    if existing.status == CaseStatus::Closed {
        return Err(AppError::BadRequest(
            "Investigation is already closed".to_string(),
        ));
    }

    let Some(investigation) = repo.close(id).await? else {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    };

    accrue_for_lead(&state, investigation.lead_user_id, BonusKind::CaseClosed).await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "investigation.close",
            "investigation",
            Some(id.to_string()),
            None,
        )
        .await?;

    let dto = investigation.into_dto();
    state
        .realtime
        .publish("investigation", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/investigations/{id}/evidence - List a case's evidence
pub async fn get_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.view")])
        .await?;

    if InvestigationRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    }

    let evidence = EvidenceRepository::new(&state.db)
        .get_by_investigation(id)
        .await?;
    let dto: Vec<_> = evidence.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct AddEvidenceBody {
    pub label: String,
    pub description: Option<String>,
    pub storage_ref: Option<String>,
}

/// POST /api/investigations/{id}/evidence - Attach evidence to a case
pub async fn add_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<AddEvidenceBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.manage")])
        .await?;

    let Some(investigation) = InvestigationRepository::new(&state.db).find_by_id(id).await?
    else {
        return Err(AppError::NotFound("Investigation not found".to_string()));
    };
    if investigation.status == CaseStatus::Closed {
        return Err(AppError::BadRequest(
            "Evidence cannot be added to a closed investigation".to_string(),
        ));
    }

    let evidence = EvidenceRepository::new(&state.db)
        .create(AddEvidenceParam {
            investigation_id: id,
            label: body.label,
            description: body.description,
            storage_ref: body.storage_ref,
            added_by: actor.user.discord_id,
        })
        .await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "evidence.add",
            "evidence",
            Some(evidence.id.to_string()),
            Some(serde_json::json!({ "investigation_id": id })),
        )
        .await?;

    let dto = evidence.into_dto();
    state.realtime.publish("evidence", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

/// DELETE /api/evidence/{id} - Remove an evidence item
pub async fn delete_evidence(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("investigations.manage")])
        .await?;

    if !EvidenceRepository::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Evidence not found".to_string()));
    }

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "evidence.delete",
            "evidence",
            Some(id.to_string()),
            None,
        )
        .await?;

    state
        .realtime
        .publish("evidence", EventAction::Deleted, &serde_json::json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}

/// Case numbers look like `IA-2026-03F1`: year plus a random hex suffix.
/// The column is unique, so the rare collision surfaces as a 500 and the
/// client retries.
fn generate_case_number() -> String {
    let suffix: u32 = rand::rng().random_range(0..0x10000);
    format!("IA-{}-{:04X}", Utc::now().year(), suffix)
}

async fn accrue_for_lead(
    state: &AppState,
    lead_user_id: u64,
    kind: BonusKind,
) -> Result<(), AppError> {
    if let Some(lead) = EmployeeRepository::new(&state.db)
        .find_by_user_id(lead_user_id)
        .await?
    {
        AccrualService::new(&state.db).record(lead.id, kind).await?;
    }
    Ok(())
}
