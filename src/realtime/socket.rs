//! Websocket endpoint.
//!
//! The upgrade request carries the same session cookie as the REST API; the
//! handler refuses unauthenticated upgrades before switching protocols.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use tokio::sync::broadcast;
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    realtime::hub::RealtimeEvent,
    state::AppState,
};

/// GET /api/ws - upgrade to the realtime event stream
pub async fn websocket(
    State(state): State<AppState>,
    session: Session,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let auth_session = AuthSession::new(&session);

    let Some(user_id) = auth_session.get_user_id().await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let rx = state.realtime.subscribe();

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, rx, user_id)))
}

/// Pumps hub events to the socket until either side closes.
///
/// Targeted events for other users are filtered out. A lagged receiver skips
/// the missed events and keeps going; clients recover missed notifications
/// from the REST listing.
async fn handle_socket(
    mut socket: WebSocket,
    mut rx: broadcast::Receiver<RealtimeEvent>,
    user_id: u64,
) {
    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Ok(event) => {
                    if event.user_id.is_some_and(|target| target != user_id) {
                        continue;
                    }
                    let text = match serde_json::to_string(&event) {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::error!("Failed to serialize realtime event: {}", e);
                            continue;
                        }
                    };
                    if socket.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Socket for user {} lagged, skipped {} events",
                        user_id,
                        skipped
                    );
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = socket.recv() => match incoming {
                // Client messages are ignored; the stream is one-way.
                Some(Ok(_)) => {}
                Some(Err(_)) | None => break,
            },
        }
    }

    tracing::debug!("Socket closed for user {}", user_id);
}
