//! Serenity-backed channel gateway.
//!
//! Resolves channels through the gateway cache and issues deletions through the
//! HTTP client. Permission introspection compares the bot member's effective
//! permissions in a channel against the capability set required to delete a
//! channel of that kind.

use serenity::all::{ChannelId, Context, GuildId, Permissions};
use serenity::async_trait;

use crate::channels::{required_permissions, ChannelError, ChannelGateway};
use crate::model::server::ChannelKind;

/// Channel gateway for one guild, backed by the serenity cache and HTTP client.
pub struct DiscordChannelGateway {
    ctx: Context,
    guild_id: GuildId,
}

impl DiscordChannelGateway {
    /// Creates a gateway bound to the given guild.
    ///
    /// # Arguments
    /// - `ctx` - Discord context carrying the cache and HTTP client
    /// - `guild_id` - Guild whose channels this gateway manages
    pub fn new(ctx: Context, guild_id: GuildId) -> Self {
        Self { ctx, guild_id }
    }
}

#[async_trait]
impl ChannelGateway for DiscordChannelGateway {
    async fn missing_permissions(&self, kind: ChannelKind, channel_id: u64) -> Permissions {
        let bot_id = self.ctx.cache.current_user().id;

        let Some(guild) = self.ctx.cache.guild(self.guild_id) else {
            return Permissions::empty();
        };
        let Some(channel) = guild.channels.get(&ChannelId::new(channel_id)) else {
            // An unresolvable channel has no permissions to check; it will be
            // reported as a deletion failure instead.
            return Permissions::empty();
        };
        let Some(member) = guild.members.get(&bot_id) else {
            return Permissions::empty();
        };

        let granted = guild.user_permissions_in(channel, member);

        required_permissions(kind) - granted
    }

    async fn delete(&self, channel_id: u64) -> Result<(), ChannelError> {
        let id = ChannelId::new(channel_id);

        // Resolve through the cache first so a stale handle is reported as
        // NotFound instead of an opaque HTTP 404.
        let known = self
            .ctx
            .cache
            .guild(self.guild_id)
            .is_some_and(|guild| guild.channels.contains_key(&id));
        if !known {
            return Err(ChannelError::NotFound { channel_id });
        }

        id.delete(&self.ctx.http).await?;

        Ok(())
    }
}
