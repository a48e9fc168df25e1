use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    service::permission::PermissionResolver,
};

/// Builds the Discord client and extracts its HTTP handle.
///
/// The HTTP handle is shared with the scheduler and any service that talks
/// to the Discord API outside the gateway.
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    permissions: PermissionResolver,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent and must be enabled in the
    // Discord Developer Portal.
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.discord_guild_id, permissions);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// This function should be called from within a tokio::spawn task since it
/// will block until the bot shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
