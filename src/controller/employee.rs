//! Employee endpoints.
//!
//! Employee records are roster-driven; these handlers list and amend them
//! but never create them.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{audit::AuditLogRepository, employee::EmployeeRepository, sanction::SanctionRepository},
    dto::employee::PaginatedEmployeesDto,
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::{
        employee::{EmployeeFilter, EmployeeStatus, UpdateEmployeeParam},
        sanction::{CreateSanctionParam, SanctionKind},
    },
    realtime::hub::EventAction,
    service::notify::NotifyService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct EmployeeListQuery {
    pub department: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    25
}

/// GET /api/employees - List employees with optional department/status filters
pub async fn get_employees(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<EmployeeListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("employees.view")])
        .await?;

    let status = query
        .status
        .as_deref()
        .map(|s| {
            EmployeeStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", s)))
        })
        .transpose()?;

    let employees = EmployeeRepository::new(&state.db)
        .get_paginated(EmployeeFilter {
            department: query.department,
            status,
            page: query.page,
            per_page: query.per_page,
        })
        .await?;

    let dto = PaginatedEmployeesDto {
        employees: employees
            .employees
            .into_iter()
            .map(|e| e.into_dto())
            .collect(),
        total: employees.total,
        page: employees.page,
        per_page: employees.per_page,
        total_pages: employees.total_pages,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/employees/{id} - Get one employee
pub async fn get_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("employees.view")])
        .await?;

    let Some(employee) = EmployeeRepository::new(&state.db).find_by_id(id).await? else {
        return Err(AppError::NotFound("Employee not found".to_string()));
    };

    Ok((StatusCode::OK, Json(employee.into_dto())))
}

#[derive(Deserialize)]
pub struct UpdateEmployeeBody {
    pub badge_number: Option<String>,
    pub status: Option<String>,
}

/// PATCH /api/employees/{id} - Amend badge number or status
pub async fn update_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdateEmployeeBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("employees.manage")])
        .await?;

    let status = body
        .status
        .as_deref()
        .map(|s| {
            EmployeeStatus::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status '{}'", s)))
        })
        .transpose()?;

    let Some(employee) = EmployeeRepository::new(&state.db)
        .update(
            id,
            UpdateEmployeeParam {
                badge_number: body.badge_number,
                status,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Employee not found".to_string()));
    };

    // A status change affects rank-gated access.
    state.permissions.invalidate(employee.user_id).await;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "employee.update",
            "employee",
            Some(id.to_string()),
            Some(serde_json::json!({
                "badge_number": employee.badge_number,
                "status": employee.status.as_str(),
            })),
        )
        .await?;

    let dto = employee.into_dto();
    state.realtime.publish("employee", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct DismissBody {
    pub reason: String,
}

/// POST /api/employees/{id}/dismiss - Dismiss an employee
///
/// Marks the record inactive, files a dismissal sanction, and notifies the
/// member.
pub async fn dismiss_employee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<DismissBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("employees.manage")])
        .await?;

    let employee_repo = EmployeeRepository::new(&state.db);
    let Some(employee) = employee_repo.find_by_id(id).await? else {
        return Err(AppError::NotFound("Employee not found".to_string()));
    };

    if employee.status == EmployeeStatus::Inactive {
        return Err(AppError::BadRequest(
            "Employee is already inactive".to_string(),
        ));
    }

    let Some(employee) = employee_repo
        .update(
            id,
            UpdateEmployeeParam {
                status: Some(EmployeeStatus::Inactive),
                ..Default::default()
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Employee not found".to_string()));
    };

    SanctionRepository::new(&state.db)
        .create(CreateSanctionParam {
            employee_id: id,
            issued_by: actor.user.discord_id,
            kind: SanctionKind::Dismissal,
            reason: body.reason.clone(),
            expires_at: None,
        })
        .await?;

    state.permissions.invalidate(employee.user_id).await;

    NotifyService::new(&state.db, &state.realtime)
        .send(
            employee.user_id,
            "Dismissed from the department",
            body.reason.clone(),
        )
        .await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "employee.dismiss",
            "employee",
            Some(id.to_string()),
            Some(serde_json::json!({ "reason": body.reason })),
        )
        .await?;

    let dto = employee.into_dto();
    state.realtime.publish("employee", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}
