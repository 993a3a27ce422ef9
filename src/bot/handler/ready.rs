//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The ready
//! handler logs connection information and registers the application's slash
//! commands globally.

use serenity::all::{Command, Context, Ready};

use crate::bot::commands;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the global slash command set on every connection. Registration is
/// idempotent on Discord's side; re-submitting the same definitions is a no-op.
///
/// # Arguments
/// - `ctx` - Discord context for the registration call
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, commands::registrations()).await {
        Ok(registered) => {
            tracing::info!("Registered {} application commands", registered.len());
        }
        Err(e) => {
            tracing::error!("Failed to register application commands: {}", e);
        }
    }
}
