//! Channel management collaborator.
//!
//! The teardown pipeline never talks to the Discord SDK directly; it goes through
//! the [`ChannelGateway`] trait, which covers the two capabilities teardown needs:
//! asking which deletion permissions are missing on a channel, and deleting a
//! channel. The production implementation in [`discord`] is backed by the serenity
//! cache and HTTP client; tests substitute an in-memory fake.

pub mod discord;

use serenity::all::Permissions;
use serenity::async_trait;
use thiserror::Error;

use crate::model::server::ChannelKind;

/// Errors from channel deletion attempts.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// The channel handle could not be resolved in the guild.
    ///
    /// Reported identically to a failed deletion: a channel that cannot be found
    /// cannot be deleted, and the caller treats both the same way.
    #[error("channel {channel_id} was not found in the guild")]
    NotFound { channel_id: u64 },

    /// Discord rejected the deletion request.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for ChannelError {
    fn from(err: serenity::Error) -> Self {
        ChannelError::Discord(Box::new(err))
    }
}

/// Capability set the bot needs to delete a channel of the given kind.
///
/// The status and players channels are voice channels, so deleting them also
/// requires the Connect capability; the category only needs view and manage.
pub fn required_permissions(kind: ChannelKind) -> Permissions {
    match kind {
        ChannelKind::Category => Permissions::VIEW_CHANNEL | Permissions::MANAGE_CHANNELS,
        ChannelKind::Status | ChannelKind::Players => {
            Permissions::VIEW_CHANNEL | Permissions::MANAGE_CHANNELS | Permissions::CONNECT
        }
    }
}

/// Abstract channel-management collaborator for a single guild.
///
/// Implementations are bound to one guild; channel IDs passed in are expected to
/// belong to it.
#[async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Returns the deletion permissions the bot is missing on a channel.
    ///
    /// An empty set means the channel can be deleted. A channel that cannot be
    /// resolved also yields an empty set; its absence surfaces later as a
    /// deletion failure rather than as a permission gap.
    async fn missing_permissions(&self, kind: ChannelKind, channel_id: u64) -> Permissions;

    /// Deletes a channel.
    ///
    /// # Returns
    /// - `Ok(())` - Channel deleted
    /// - `Err(ChannelError::NotFound)` - Channel handle could not be resolved
    /// - `Err(ChannelError::Discord)` - Discord rejected the deletion
    async fn delete(&self, channel_id: u64) -> Result<(), ChannelError>;
}
