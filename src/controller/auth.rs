//! Discord OAuth login, callback, logout, and current-user endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession, OAuthFlowSession},
    },
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Query parameters for the login endpoint.
#[derive(Deserialize)]
pub struct LoginParams {
    /// Bootstrap admin code, only honored while no admin user exists.
    pub admin_code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

/// GET /api/auth/login - Redirect to the Discord authorize page
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    params: Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    if let Some(code) = &params.admin_code {
        if state.admin_codes.validate(code) {
            OAuthFlowSession::new(&session).set_admin_flag(true).await?;
        }
    }

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /api/auth/callback - Complete the OAuth flow and establish a session
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.state).await?;

    let set_admin = OAuthFlowSession::new(&session).take_admin_flag().await?;

    let user = auth_service
        .callback(params.code.clone(), set_admin.then_some(true))
        .await?;

    AuthSession::new(&session).set_user_id(user.discord_id).await?;

    tracing::info!("User {} ({}) logged in", user.name, user.discord_id);

    Ok(Redirect::temporary(&state.app_url))
}

/// GET /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;
    Ok(Redirect::temporary("/"))
}

/// GET /api/auth/me - Current authenticated user
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(actor.user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
