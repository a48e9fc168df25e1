//! Calendar endpoints, including recurrence expansion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{audit::AuditLogRepository, calendar::CalendarRepository},
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    model::calendar::{CreateEventParam, Recurrence, UpdateEventParam},
    realtime::hub::EventAction,
    service::calendar::expand_occurrences,
    state::AppState,
};

/// GET /api/calendar/events - List all events
pub async fn get_events(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let events = CalendarRepository::new(&state.db).get_all().await?;
    let dto: Vec<_> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct OccurrenceQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// GET /api/calendar/occurrences - Expand events inside a window
pub async fn get_occurrences(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<OccurrenceQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    if query.from >= query.to {
        return Err(AppError::BadRequest(
            "Window start must be before window end".to_string(),
        ));
    }

    let events = CalendarRepository::new(&state.db)
        .get_candidates(query.from, query.to)
        .await?;

    let occurrences = expand_occurrences(&events, query.from, query.to);
    let dto: Vec<_> = occurrences.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct CreateEventBody {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default = "default_recurrence")]
    pub recurrence: String,
}

fn default_recurrence() -> String {
    "none".to_string()
}

/// POST /api/calendar/events - Create an event
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<CreateEventBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("calendar.manage")])
        .await?;

    if body.ends_at <= body.starts_at {
        return Err(AppError::BadRequest(
            "Event must end after it starts".to_string(),
        ));
    }

    let recurrence = Recurrence::parse(&body.recurrence).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown recurrence '{}'", body.recurrence))
    })?;

    let event = CalendarRepository::new(&state.db)
        .create(CreateEventParam {
            title: body.title,
            description: body.description,
            starts_at: body.starts_at,
            ends_at: body.ends_at,
            recurrence,
            created_by: actor.user.discord_id,
        })
        .await?;

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "calendar.create",
            "calendar_event",
            Some(event.id.to_string()),
            None,
        )
        .await?;

    let dto = event.into_dto();
    state.realtime.publish("calendar", EventAction::Created, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub recurrence: Option<String>,
}

/// PATCH /api/calendar/events/{id} - Edit an event
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(body): Json<UpdateEventBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("calendar.manage")])
        .await?;

    let recurrence = body
        .recurrence
        .as_deref()
        .map(|r| {
            Recurrence::parse(r)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown recurrence '{}'", r)))
        })
        .transpose()?;

    let repo = CalendarRepository::new(&state.db);
    let Some(existing) = repo.find_by_id(id).await? else {
        return Err(AppError::NotFound("Calendar event not found".to_string()));
    };

    // Validate the merged window before persisting anything.
    let starts_at = body.starts_at.unwrap_or(existing.starts_at);
    let ends_at = body.ends_at.unwrap_or(existing.ends_at);
    if ends_at <= starts_at {
        return Err(AppError::BadRequest(
            "Event must end after it starts".to_string(),
        ));
    }

    let Some(event) = repo
        .update(
            id,
            UpdateEventParam {
                title: body.title,
                description: body.description,
                starts_at: body.starts_at,
                ends_at: body.ends_at,
                recurrence,
            },
        )
        .await?
    else {
        return Err(AppError::NotFound("Calendar event not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "calendar.update",
            "calendar_event",
            Some(id.to_string()),
            None,
        )
        .await?;

    let dto = event.into_dto();
    state.realtime.publish("calendar", EventAction::Updated, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// DELETE /api/calendar/events/{id} - Remove an event
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Permission("calendar.manage")])
        .await?;

    if !CalendarRepository::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Calendar event not found".to_string()));
    }

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "calendar.delete",
            "calendar_event",
            Some(id.to_string()),
            None,
        )
        .await?;

    state
        .realtime
        .publish("calendar", EventAction::Deleted, &serde_json::json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}
