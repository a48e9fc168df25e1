//! Audit log listing.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    data::audit::AuditLogRepository,
    dto::{api::PageQuery, audit::PaginatedAuditDto},
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    state::AppState,
};

/// GET /api/audit - Paginated audit trail (leadership)
pub async fn get_audit_log(
    State(state): State<AppState>,
    session: Session,
    Query(page): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session)
        .require(&[Access::Permission("leadership.audit")])
        .await?;

    let (entries, total) = AuditLogRepository::new(&state.db)
        .get_paginated(page.page, page.per_page)
        .await?;

    let total_pages = total.div_ceil(page.per_page.max(1));

    let dto = PaginatedAuditDto {
        entries: entries.into_iter().map(|e| e.into_dto()).collect(),
        total,
        page: page.page,
        per_page: page.per_page,
        total_pages,
    };

    Ok((StatusCode::OK, Json(dto)))
}
