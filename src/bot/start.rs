use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::{ChannelSettings, Config};
use crate::error::AppError;

/// Builds the Discord bot client without connecting.
///
/// The returned client's `http` and `cache` can be handed to `SerenityPlatform`
/// before the client is started.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `settings` - Game channel settings shared with the event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config, settings: Arc<ChannelSettings>) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(settings))
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// This function blocks until the bot shuts down, so it should be awaited last or
/// from within a tokio::spawn task.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
