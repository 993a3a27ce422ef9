//! Outbound interaction replies.

use serenity::all::{CommandInteraction, EditInteractionResponse, Http};

/// Edits the deferred ephemeral response with the given text.
///
/// Replies are fire-and-forget: a send failure is an operator concern, never a
/// reason to fail the operation being reported on, so errors are logged and
/// swallowed here.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `interaction` - The deferred interaction to reply to
/// - `content` - Message text
pub async fn send_message(
    http: &Http,
    interaction: &CommandInteraction,
    content: impl Into<String>,
) {
    let builder = EditInteractionResponse::new().content(content);

    if let Err(e) = interaction.edit_response(http, builder).await {
        tracing::error!(
            "Failed to send reply for /{} in guild {:?}: {}",
            interaction.data.name,
            interaction.guild_id,
            e
        );
    }
}
