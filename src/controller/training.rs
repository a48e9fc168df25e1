//! Training endpoints.
//!
//! Recording a conducted training accrues a bonus for the instructor.

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
    data::{audit::AuditLogRepository, employee::EmployeeRepository, training::TrainingRepository},
    dto::api::PageQuery,
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::{
        bonus::BonusKind,
        training::{CreateTrainingParam, TrainingAttendee, UpdateTrainingParam},
    },
    realtime::hub::EventAction,
    service::accrual::AccrualService,
    state::AppState,
};

#[derive(Serialize)]
struct TrainingPageDto {
    trainings: Vec<crate::dto::training::TrainingDto>,
    total: u64,
}

/// GET /api/trainings - List trainings
pub async fn get_trainings(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let (trainings, total) = TrainingRepository::new(&state.db)
        .get_paginated(page.page, page.per_page)
        .await?;

    let dto = TrainingPageDto {
        trainings: trainings.into_iter().map(|t| t.into_dto()).collect(),
        total,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/trainings/{id} - Get one training
pub async fn get_training(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let Some(training) = TrainingRepository::new(&state.db).find_by_id(id).await? else {
        return Err(AppError::NotFound("Training not found".to_string()));
    };

    Ok((StatusCode::OK, Json(training.into_dto())))
}

#[derive(Deserialize)]
pub struct CreateTrainingBody {
    pub title: String,
    pub conducted_at: DateTime<Utc>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// POST /api/trainings - Record a conducted training
pub async fn create_training(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateTrainingBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("trainings.manage")])
        .await?;

    let training = TrainingRepository::new(&state.db)
        .create(CreateTrainingParam {
            title: body.title,
            instructor_user_id: actor.user.discord_id,
            conducted_at: body.conducted_at,
            location: body.location,
            notes: body.notes,
        })
        .await?;

    if let Some(instructor) = EmployeeRepository::new(&state.db)
        .find_by_user_id(actor.user.discord_id)
        .await?
    {
        AccrualService::new(&state.db)
            .record(instructor.id, BonusKind::TrainingConducted)
            .await?;
    }

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "training.create",
            "training",
            Some(training.id.to_string()),
            None,
        )
        .await?;

    let dto = training.into_dto();
    state.realtime.publish("training", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

#[derive(Deserialize)]
pub struct UpdateTrainingBody {
    pub title: Option<String>,
    pub location: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

/// PATCH /api/trainings/{id} - Amend a training record
pub async fn update_training(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdateTrainingBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("trainings.manage")])
        .await?;

    let Some(training) = TrainingRepository::new(&state.db)
        .update(
            id,
            UpdateTrainingParam {
                title: body.title,
                location: body.location,
                notes: body.notes,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Training not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "training.update",
            "training",
            Some(id.to_string()),
            None,
        )
        .await?;

    let dto = training.into_dto();
    state.realtime.publish("training", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// DELETE /api/trainings/{id} - Remove a training record
pub async fn delete_training(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("trainings.manage")])
        .await?;

    if !TrainingRepository::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Training not found".to_string()));
    }

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "training.delete",
            "training",
            Some(id.to_string()),
            None,
        )
        .await?;

    state
        .realtime
        .publish("training", EventAction::Deleted, &serde_json::json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/trainings/{id}/attendance - List attendance
pub async fn get_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let repo = TrainingRepository::new(&state.db);
    if repo.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("Training not found".to_string()));
    }

    let attendance = repo.get_attendance(id).await?;
    let dto: Vec<_> = attendance.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct AttendanceEntryBody {
    pub employee_id: i32,
    #[serde(default = "default_passed")]
    pub passed: bool,
}

fn default_passed() -> bool {
    true
}

/// PUT /api/trainings/{id}/attendance - Replace the attendance list
pub async fn set_attendance(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<Vec<AttendanceEntryBody>>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("trainings.manage")])
        .await?;

    let repo = TrainingRepository::new(&state.db);
    if repo.find_by_id(id).await?.is_none() {
        return Err(AppError::NotFound("Training not found".to_string()));
    }

    let employee_repo = EmployeeRepository::new(&state.db);
    for entry in &body {
        if employee_repo.find_by_id(entry.employee_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Unknown employee {}",
                entry.employee_id
            )));
        }
    }

    let attendees: Vec<TrainingAttendee> = body
        .into_iter()
        .map(|entry| TrainingAttendee {
            employee_id: entry.employee_id,
            passed: entry.passed,
        })
        .collect();

    repo.set_attendance(id, &attendees).await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "training.set_attendance",
            "training",
            Some(id.to_string()),
            Some(serde_json::json!({ "attendees": attendees.len() })),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
