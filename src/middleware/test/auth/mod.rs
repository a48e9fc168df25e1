use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;

use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
    realtime::hub::RealtimeHub,
    service::{admin::AdminCodeService, permission::PermissionResolver},
    startup,
    state::AppState,
};
use test_utils::builder::TestBuilder;

mod require;

/// Builds an `AppState` around a test database.
///
/// The OAuth and Discord clients are real instances pointed at placeholder
/// endpoints; guard tests never reach the network.
fn test_state(db: DatabaseConnection) -> AppState {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        app_url: "http://localhost:8080".to_string(),
        discord_client_id: "client-id".to_string(),
        discord_client_secret: "client-secret".to_string(),
        discord_redirect_url: "http://localhost:8080/api/auth/callback".to_string(),
        discord_bot_token: "token".to_string(),
        discord_guild_id: 1,
        discord_auth_url: "https://discord.com/oauth2/authorize".to_string(),
        discord_token_url: "https://discord.com/api/oauth2/token".to_string(),
    };

    let oauth_client = startup::setup_oauth_client(&config).expect("placeholder oauth config");

    AppState::new(
        db,
        reqwest::Client::new(),
        oauth_client,
        AdminCodeService::new(),
        Arc::new(Http::new("")),
        PermissionResolver::new(),
        RealtimeHub::new(),
        config.app_url,
    )
}

fn guard_tables() -> TestBuilder {
    TestBuilder::new()
        .with_employee_tables()
        .with_permission_tables()
}
