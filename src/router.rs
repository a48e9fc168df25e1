//! Axum route configuration and API documentation.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::Config,
    controller::{
        announcement, audit, auth, bonus, calendar, department, employee, investigation,
        notification, rank, role, sanction, training, treasury, user,
    },
    error::{config::ConfigError, AppError},
    realtime::socket,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(components(schemas(
    crate::dto::api::ErrorDto,
    crate::dto::announcement::AnnouncementDto,
    crate::dto::audit::AuditEntryDto,
    crate::dto::bonus::BonusPaymentDto,
    crate::dto::bonus::WorkLogDto,
    crate::dto::calendar::CalendarEventDto,
    crate::dto::calendar::OccurrenceDto,
    crate::dto::employee::EmployeeDto,
    crate::dto::investigation::EvidenceDto,
    crate::dto::investigation::InvestigationDto,
    crate::dto::notification::NotificationDto,
    crate::dto::reference::DepartmentDto,
    crate::dto::reference::RankDto,
    crate::dto::role::RoleDto,
    crate::dto::sanction::SanctionDto,
    crate::dto::training::TrainingAttendeeDto,
    crate::dto::training::TrainingDto,
    crate::dto::treasury::TreasuryAccountDto,
    crate::dto::treasury::TreasuryTransactionDto,
    crate::dto::user::UserDto,
)))]
struct ApiDoc;

pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let cors = cors_layer(config)?;

    let router = Router::new()
        .merge(auth_routes()?)
        .merge(api_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    Ok(router)
}

/// OAuth endpoints, rate limited since they drive outbound Discord calls.
fn auth_routes() -> Result<Router<AppState>, AppError> {
    let governor_config = GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(10)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid rate limiter config".to_string()))?;

    Ok(Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .layer(GovernorLayer::new(Arc::new(governor_config))))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        // Users and roles
        .route("/api/users", get(user::get_users))
        .route("/api/users/{discord_id}/admin", put(user::set_admin))
        .route("/api/roles", get(role::get_roles))
        .route("/api/roles/{role_id}/permissions", put(role::set_permissions))
        // Employees
        .route("/api/employees", get(employee::get_employees))
        .route("/api/employees/{id}", get(employee::get_employee))
        .route("/api/employees/{id}", patch(employee::update_employee))
        .route("/api/employees/{id}/dismiss", post(employee::dismiss_employee))
        // Reference tables
        .route("/api/ranks", get(rank::get_ranks))
        .route("/api/ranks/{level}", patch(rank::rename_rank))
        .route("/api/departments", get(department::get_departments))
        .route(
            "/api/departments/{code}/employees",
            get(department::get_department_employees),
        )
        // Sanctions
        .route("/api/sanctions", get(sanction::get_sanctions))
        .route("/api/sanctions", post(sanction::create_sanction))
        .route("/api/sanctions/{id}", get(sanction::get_sanction))
        .route("/api/sanctions/{id}", patch(sanction::update_sanction))
        .route("/api/sanctions/{id}", delete(sanction::delete_sanction))
        // Investigations and evidence
        .route("/api/investigations", get(investigation::get_investigations))
        .route("/api/investigations", post(investigation::open_investigation))
        .route("/api/investigations/{id}", get(investigation::get_investigation))
        .route(
            "/api/investigations/{id}",
            patch(investigation::update_investigation),
        )
        .route(
            "/api/investigations/{id}/close",
            post(investigation::close_investigation),
        )
        .route(
            "/api/investigations/{id}/evidence",
            get(investigation::get_evidence),
        )
        .route(
            "/api/investigations/{id}/evidence",
            post(investigation::add_evidence),
        )
        .route("/api/evidence/{id}", delete(investigation::delete_evidence))
        // Trainings
        .route("/api/trainings", get(training::get_trainings))
        .route("/api/trainings", post(training::create_training))
        .route("/api/trainings/{id}", get(training::get_training))
        .route("/api/trainings/{id}", patch(training::update_training))
        .route("/api/trainings/{id}", delete(training::delete_training))
        .route("/api/trainings/{id}/attendance", get(training::get_attendance))
        .route("/api/trainings/{id}/attendance", put(training::set_attendance))
        // Treasury
        .route("/api/treasury/accounts", get(treasury::get_accounts))
        .route("/api/treasury/accounts/{id}", get(treasury::get_account))
        .route(
            "/api/treasury/accounts/{id}/transactions",
            get(treasury::get_transactions),
        )
        .route(
            "/api/treasury/accounts/{id}/transactions",
            post(treasury::create_transaction),
        )
        // Announcements
        .route("/api/announcements", get(announcement::get_announcements))
        .route("/api/announcements", post(announcement::create_announcement))
        .route(
            "/api/announcements/{id}",
            patch(announcement::update_announcement),
        )
        .route(
            "/api/announcements/{id}",
            delete(announcement::delete_announcement),
        )
        .route("/api/announcements/{id}/pin", post(announcement::pin_announcement))
        // Calendar
        .route("/api/calendar/events", get(calendar::get_events))
        .route("/api/calendar/events", post(calendar::create_event))
        .route("/api/calendar/events/{id}", patch(calendar::update_event))
        .route("/api/calendar/events/{id}", delete(calendar::delete_event))
        .route("/api/calendar/occurrences", get(calendar::get_occurrences))
        // Notifications
        .route("/api/notifications", get(notification::get_notifications))
        .route("/api/notifications/{id}/read", post(notification::mark_read))
        .route("/api/notifications/read-all", post(notification::mark_all_read))
        // Bonuses and work logs
        .route("/api/bonuses", get(bonus::get_payments))
        .route("/api/bonuses/mine", get(bonus::get_my_week))
        .route("/api/bonuses/adjustments", post(bonus::create_adjustment))
        .route("/api/worklogs", get(bonus::get_work_logs))
        // Audit trail
        .route("/api/audit", get(audit::get_audit_log))
        // Realtime
        .route("/api/ws", get(socket::websocket))
}

fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config.app_url.parse::<HeaderValue>().map_err(|e| {
        AppError::ConfigErr(ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}
