mod bot;
mod config;
mod controller;
mod data;
mod dto;
mod error;
mod middleware;
mod model;
mod realtime;
mod router;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    realtime::hub::RealtimeHub,
    service::{admin::AdminCodeService, permission::PermissionResolver},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("precinct=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;

    let admin_codes = AdminCodeService::new();
    let permissions = PermissionResolver::new();
    let realtime = RealtimeHub::new();

    tracing::info!("Starting server");

    // Initialize the Discord bot and extract its HTTP client for shared use.
    let (bot_client, discord_http) =
        bot::start::init_bot(&config, db.clone(), permissions.clone()).await?;

    // Run the bot gateway in a separate task.
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    // Generate a bootstrap admin login link if no admin exists yet.
    startup::check_for_admin(&db, &config, &admin_codes).await?;

    // The scheduler handle must outlive the server; dropping it stops the jobs.
    let _scheduler = scheduler::start_scheduler(
        db.clone(),
        discord_http.clone(),
        config.discord_guild_id,
        permissions.clone(),
    )
    .await?;

    let app = router::router(&config)?
        .with_state(AppState::new(
            db,
            http_client,
            oauth_client,
            admin_codes,
            discord_http,
            permissions,
            realtime,
            config.app_url.clone(),
        ))
        .layer(session_layer);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    // The rate limiter keys on the peer address, which axum only exposes
    // through connect info.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
