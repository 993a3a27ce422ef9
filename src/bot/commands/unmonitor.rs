//! The `/unmonitor` command.
//!
//! Deregisters one monitored server, or every monitored server in the guild when
//! the literal `all` is given, and deletes the associated channels. Validation
//! happens before any mutation; the teardown service decides how far a failing
//! attempt proceeds and the outcome is translated into a localized reply here.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::bot::messaging::send_message;
use crate::channels::discord::DiscordChannelGateway;
use crate::data::monitored_server::MonitoredServerRepository;
use crate::error::AppError;
use crate::localization::unmonitor as strings;
use crate::model::teardown::{BatchReport, TeardownOutcome};
use crate::service::teardown::TeardownService;

/// Registered name of the command.
pub const NAME: &str = "unmonitor";

/// Name of the command's single optional option.
const SERVER_OPTION: &str = "server";

/// Builds the command's registration payload.
pub fn register() -> CreateCommand {
    let mut command = CreateCommand::new(NAME)
        .description("Unmonitor the specified server or all servers")
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false);

    for (locale, name) in strings::name_localizations() {
        command = command.name_localized(locale, name);
    }
    for (locale, description) in strings::description_localizations() {
        command = command.description_localized(locale, description);
    }

    let mut option =
        CreateCommandOption::new(CommandOptionType::String, SERVER_OPTION, "Server IP address or nickname")
            .required(false);
    for (locale, description) in strings::server_option_localizations() {
        option = option.description_localized(locale, description);
    }

    command.add_option(option)
}

/// Executes the command against the invoking guild.
///
/// Validation failures (nothing monitored, no target resolvable, target is the
/// default server) reply and return without mutating anything. The `all` target
/// runs the guild-wide teardown and reports every server's outcome in one
/// consolidated message; a named or defaulted target runs the single-server
/// teardown and replies according to its outcome.
///
/// # Arguments
/// - `ctx` - Discord context carrying the cache and HTTP client
/// - `db` - Database connection
/// - `interaction` - The deferred interaction being handled
///
/// # Returns
/// - `Ok(())` - Handled, including all reported failure outcomes
/// - `Err(AppError)` - Unexpected failure, reported by the dispatcher boundary
pub async fn execute(
    ctx: &Context,
    db: &DatabaseConnection,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    // Registration is guild-only; an interaction without a guild has nothing to act on.
    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };
    let locale = interaction.locale.as_str();

    let repo = MonitoredServerRepository::new(db);
    let servers = repo.get_by_guild_id(guild_id.get()).await?;
    if servers.is_empty() {
        send_message(&ctx.http, interaction, strings::no_monitored_servers(locale)).await;
        return Ok(());
    }

    let gateway = DiscordChannelGateway::new(ctx.clone(), guild_id);
    let service = TeardownService::new(db, &gateway);
    let query = server_option(interaction);

    if query == Some("all") {
        let report = service.teardown_all(guild_id.get(), &servers).await;
        send_message(&ctx.http, interaction, render_batch_report(locale, &report)).await;
        return Ok(());
    }

    let server = match query {
        Some(query) => match repo.find_by_ip_or_nickname(guild_id.get(), query).await? {
            Some(server) => server,
            None => {
                send_message(&ctx.http, interaction, strings::not_monitored(locale)).await;
                return Ok(());
            }
        },
        None => match repo.find_default(guild_id.get()).await? {
            Some(server) => server,
            None => {
                send_message(&ctx.http, interaction, strings::no_server_specified(locale)).await;
                return Ok(());
            }
        },
    };

    if server.is_default {
        send_message(&ctx.http, interaction, strings::cannot_remove_default(locale)).await;
        return Ok(());
    }

    let reply = match service.teardown(guild_id.get(), &server).await {
        TeardownOutcome::Removed => strings::success_message(locale),
        // The outcome carries per-channel detail, but the single-server reply
        // stays generic; only the guild-wide report enumerates the gaps.
        TeardownOutcome::PermissionBlocked(_) => strings::permission_error(locale),
        TeardownOutcome::RecordDeletionFailed => strings::unmonitoring_error(locale),
        TeardownOutcome::ChannelsNotDeleted(_) => strings::deletion_error(locale),
    };
    send_message(&ctx.http, interaction, reply).await;

    Ok(())
}

/// Extracts the `server` option value, if supplied.
fn server_option(interaction: &CommandInteraction) -> Option<&str> {
    interaction
        .data
        .options
        .iter()
        .find(|option| option.name == SERVER_OPTION)
        .and_then(|option| option.value.as_str())
}

/// Renders the consolidated reply for a guild-wide teardown.
///
/// A clean report collapses to the plain success message. Otherwise the reply
/// leads with the generic batch failure line, followed by the
/// permission-blocked servers with their per-channel missing permissions, and
/// the deregistered servers whose channels must be removed manually.
fn render_batch_report(locale: &str, report: &BatchReport) -> String {
    if report.is_clean() {
        return strings::success_message(locale).to_string();
    }

    let mut message = strings::batch_error_message(locale).to_string();

    if !report.permission_blocked.is_empty() {
        message.push_str("\n\n");
        message.push_str(strings::batch_not_unmonitored(locale));
        for server in &report.permission_blocked {
            for gap in &server.gaps {
                message.push_str(&format!(
                    "\n{} // {}: {}",
                    server.name,
                    gap.kind,
                    gap.missing_names()
                ));
            }
        }
    }

    if !report.channels_remain.is_empty() {
        message.push_str("\n\n");
        message.push_str(strings::batch_not_deleted(locale));
        for server in &report.channels_remain {
            let kinds = server
                .remaining
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!("\n{} // {}", server.name, kinds));
        }
    }

    message
}
