//! Bonus payment and work-log endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    data::{
        audit::AuditLogRepository,
        bonus::{BonusPaymentRepository, WorkLogRepository},
        employee::EmployeeRepository,
    },
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    service::accrual::{week_start_of, AccrualService},
    state::AppState,
};

#[derive(Deserialize)]
pub struct BonusListQuery {
    pub week_start: Option<NaiveDate>,
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
struct BonusPageDto {
    payments: Vec<crate::dto::bonus::BonusPaymentDto>,
    total: u64,
}

/// GET /api/bonuses - List payments by week and employee (leadership)
pub async fn get_payments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BonusListQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("leadership.view")])
        .await?;

    let (payments, total) = BonusPaymentRepository::new(&state.db)
        .get_paginated(query.week_start, query.employee_id, query.page, query.per_page)
        .await?;

    let dto = BonusPageDto {
        payments: payments.into_iter().map(|p| p.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Serialize)]
struct WeekSummaryDto {
    week_start: NaiveDate,
    total: i64,
    work_log: Option<crate::dto::bonus::WorkLogDto>,
}

/// GET /api/bonuses/mine - The caller's accruals for the current week
pub async fn get_my_week(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session).require(&[]).await?;

    let Some(employee) = EmployeeRepository::new(&state.db)
        .find_by_user_id(actor.user.discord_id)
        .await?
    else {
        return Err(AppError::NotFound(
            "No employee record for the current user".to_string(),
        ));
    };

    let week_start = week_start_of(Utc::now());

    let total = BonusPaymentRepository::new(&state.db)
        .week_total(employee.id, week_start)
        .await?;
    let work_log = WorkLogRepository::new(&state.db)
        .get_for_employee_week(employee.id, week_start)
        .await?;

    let dto = WeekSummaryDto {
        week_start,
        total,
        work_log: work_log.map(|w| w.into_dto()),
    };

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct AdjustmentBody {
    pub employee_id: i32,
    pub amount: i64,
    pub reason: Option<String>,
}

/// POST /api/bonuses/adjustments - Manual accrual adjustment (leadership)
pub async fn create_adjustment(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AdjustmentBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("leadership.manage")])
        .await?;

    let Some(payment) = AccrualService::new(&state.db)
        .record_adjustment(body.employee_id, body.amount)
        .await?
    else {
        return Err(AppError::BadRequest(
            "Adjustments require an active employee".to_string(),
        ));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "bonus.adjustment",
            "bonus_payment",
            Some(payment.id.to_string()),
            Some(serde_json::json!({
                "employee_id": body.employee_id,
                "amount": body.amount,
                "reason": body.reason,
            })),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(payment.into_dto())))
}

#[derive(Deserialize)]
pub struct WorkLogQuery {
    pub week_start: Option<NaiveDate>,
}

/// GET /api/worklogs - Every employee's counters for a week (leadership)
///
/// Defaults to the current week when no `week_start` is given.
pub async fn get_work_logs(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<WorkLogQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("leadership.view")])
        .await?;

    let week_start = query.week_start.unwrap_or_else(|| week_start_of(Utc::now()));

    let work_logs = WorkLogRepository::new(&state.db)
        .get_for_week(week_start)
        .await?;
    let dto: Vec<_> = work_logs.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
