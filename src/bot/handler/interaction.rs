//! Slash command dispatcher.
//!
//! Every inbound command interaction moves through the same pipeline: defer the
//! reply, gate on the invoking user's cooldown, then hand off to the matched
//! command handler exactly once. The dispatcher is the outermost error boundary;
//! a handler error is logged with its full context and answered with a generic
//! localized message, never re-thrown.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, Interaction};

use crate::bot::commands::BotCommand;
use crate::bot::cooldown::{CooldownGate, CooldownTracker};
use crate::bot::messaging::send_message;
use crate::localization;

/// Handles an interaction delivered by the gateway.
///
/// Only chat input commands are processed. Command names not present in the
/// registered command table are ignored without a reply or a log entry; such
/// interactions only arise from stale or foreign registrations.
///
/// # Arguments
/// - `db` - Database connection shared with command handlers
/// - `cooldowns` - Cooldown tracker shared across all dispatches
/// - `ctx` - Discord context for the interaction
/// - `interaction` - The raw interaction event
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    cooldowns: &CooldownTracker,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(bot_command) = BotCommand::from_name(&command.data.name) else {
        return;
    };

    // Acknowledge within the platform's response window. If even this fails
    // there is no channel left to report through, so log and stop.
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!(
            "Error deferring reply to /{} in guild {:?} (options: {}): {}",
            command.data.name,
            command.guild_id,
            command_options(&command),
            e
        );
        return;
    }

    let gate = cooldowns.check_and_record(&command.data.name, command.user.id.get(), Utc::now());
    if let CooldownGate::Denied { retry_at } = gate {
        send_message(
            &ctx.http,
            &command,
            localization::interaction::cooldown_message(&command.locale, retry_at.timestamp()),
        )
        .await;
        return;
    }

    if let Err(e) = bot_command.execute(&ctx, db, &command).await {
        tracing::error!(
            "Error executing /{} in guild {:?} (options: {}): {}",
            command.data.name,
            command.guild_id,
            command_options(&command),
            e
        );
        send_message(
            &ctx.http,
            &command,
            localization::interaction::error_message(&command.locale),
        )
        .await;
    }
}

/// Renders the supplied option name/value pairs as JSON for diagnostic logging.
fn command_options(command: &CommandInteraction) -> String {
    if command.data.options.is_empty() {
        return "None".to_string();
    }

    let options: Vec<serde_json::Value> = command
        .data
        .options
        .iter()
        .map(|option| {
            let value = option
                .value
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{:?}", option.value));
            serde_json::json!({ "name": option.name, "value": value })
        })
        .collect();

    serde_json::Value::Array(options).to_string()
}
