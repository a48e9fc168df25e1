//! Rank reference endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{audit::AuditLogRepository, reference::RankRepository},
    error::AppError,
    middleware::auth::{Access, AuthGuard},
    state::AppState,
};

/// GET /api/ranks - List the rank table
pub async fn get_ranks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &session).require(&[]).await?;

    let ranks = RankRepository::new(&state.db).get_all().await?;
    let dto: Vec<_> = ranks.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[derive(Deserialize)]
pub struct RenameRankBody {
    pub title: String,
}

/// PATCH /api/ranks/{level} - Rename a rank (admin)
pub async fn rename_rank(
    State(state): State<AppState>,
    session: Session,
    Path(level): Path<i32>,
    Json(body): Json<RenameRankBody>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session)
        .require(&[Access::Admin])
        .await?;

    let Some(rank) = RankRepository::new(&state.db)
        .rename(level, body.title)
        .await?
    else {
        return Err(AppError::NotFound("Rank not found".to_string()));
    };

    AuditLogRepository::new(&state.db)
        .record(
            actor.user.discord_id,
            "rank.rename",
            "rank",
            Some(level.to_string()),
            Some(serde_json::json!({ "title": rank.title })),
        )
        .await?;

    Ok((StatusCode::OK, Json(rank.into_dto())))
}
