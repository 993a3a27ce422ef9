use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner.
///
/// This function creates and starts the Discord bot client and blocks until the
/// bot shuts down.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILDS keeps the guild and channel caches populated for permission
    // pre-checks and channel deletion. Interactions arrive regardless of intents.
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
