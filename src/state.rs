//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields use
//! cheap-to-clone types: the database connection is a pool handle, the HTTP
//! and OAuth clients are internally reference-counted, and the resolver and
//! hub share their interior state between clones.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    realtime::hub::RealtimeHub,
    service::{admin::AdminCodeService, permission::PermissionResolver},
};

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    ///
    /// Configured with redirects disabled to prevent SSRF issues when
    /// talking to the Discord API.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Service holding the single-use bootstrap admin code.
    pub admin_codes: AdminCodeService,

    /// Discord HTTP client shared with the bot and scheduler.
    pub discord_http: Arc<Http>,

    /// Cached permission-set resolver backing the auth guard.
    pub permissions: PermissionResolver,

    /// Broadcast hub feeding the websocket endpoint.
    pub realtime: RealtimeHub,

    /// Application base URL used for post-login redirects.
    pub app_url: String,
}

impl AppState {
    /// Creates the application state from initialized dependencies.
    ///
    /// Called once during server startup; the resulting state is provided to
    /// the Axum router.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        admin_codes: AdminCodeService,
        discord_http: Arc<Http>,
        permissions: PermissionResolver,
        realtime: RealtimeHub,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            admin_codes,
            discord_http,
            permissions,
            realtime,
            app_url,
        }
    }
}
