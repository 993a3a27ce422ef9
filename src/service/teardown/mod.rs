//! Monitored server teardown.
//!
//! Tearing a server down means deregistering its persistence record and deleting
//! its three managed channels. The pipeline is ordered so that a permission
//! failure aborts before any mutation, while a channel-deletion failure can only
//! occur after the record is already gone. The two entry points differ in how
//! record deletion is sequenced:
//!
//! - [`TeardownService::teardown`] (single server): permission pre-check, then
//!   record deletion, then channel deletion.
//! - [`TeardownService::teardown_all`] (guild-wide): all permission pre-checks
//!   settle first, then one bulk deregistration for every server that passed,
//!   then the channel deletion fan-out.

mod batch;
mod single;

#[cfg(test)]
mod test;

use futures::future::join_all;
use sea_orm::DatabaseConnection;

use crate::channels::ChannelGateway;
use crate::model::server::{ChannelKind, MonitoredServer};
use crate::model::teardown::ChannelPermissionGap;

/// Coordinates deregistration and channel removal for monitored servers.
///
/// Bound to a single guild through the channel gateway; the guild ID is passed
/// per call for the persistence operations.
pub struct TeardownService<'a> {
    db: &'a DatabaseConnection,
    channels: &'a dyn ChannelGateway,
}

impl<'a> TeardownService<'a> {
    /// Creates a new teardown service.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `channels` - Channel gateway for the guild being operated on
    pub fn new(db: &'a DatabaseConnection, channels: &'a dyn ChannelGateway) -> Self {
        Self { db, channels }
    }

    /// Collects the permission gaps blocking deletion of a server's channels.
    ///
    /// All three channels are checked to completion and the results inspected
    /// afterwards; the check order is irrelevant and no check can abort its
    /// siblings. An empty result means the teardown may proceed.
    ///
    /// # Arguments
    /// - `server` - Server whose channels are checked
    ///
    /// # Returns
    /// - `Vec<ChannelPermissionGap>` - One entry per channel with missing permissions
    pub(crate) async fn permission_gaps(
        &self,
        server: &MonitoredServer,
    ) -> Vec<ChannelPermissionGap> {
        let checks = join_all(server.channels().map(|(kind, channel_id)| async move {
            let missing = self.channels.missing_permissions(kind, channel_id).await;
            ChannelPermissionGap { kind, missing }
        }))
        .await;

        checks
            .into_iter()
            .filter(|gap| !gap.missing.is_empty())
            .collect()
    }

    /// Deletes a server's three channels and returns the kinds that survived.
    ///
    /// The deletions run independently; one slot's failure never short-circuits
    /// the other two. Each failure is logged with its channel context. The
    /// category is attempted last since it is the structural parent of the other
    /// two channels.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the channels belong to (for log context)
    /// - `server` - Server whose channels are deleted
    ///
    /// # Returns
    /// - `Vec<ChannelKind>` - Channels that could not be deleted, empty on full success
    pub(crate) async fn remove_channels(
        &self,
        guild_id: u64,
        server: &MonitoredServer,
    ) -> Vec<ChannelKind> {
        let slots = [
            (ChannelKind::Status, server.status_id),
            (ChannelKind::Players, server.players_id),
            (ChannelKind::Category, server.category_id),
        ];

        let attempts = join_all(slots.map(|(kind, channel_id)| async move {
            match self.channels.delete(channel_id).await {
                Ok(()) => None,
                Err(e) => {
                    tracing::error!(
                        "Failed to delete {} {} for server {} in guild {}: {}",
                        kind,
                        channel_id,
                        server.ip,
                        guild_id,
                        e
                    );
                    Some(kind)
                }
            }
        }))
        .await;

        attempts.into_iter().flatten().collect()
    }
}
