//! Single-server teardown.

use crate::data::monitored_server::MonitoredServerRepository;
use crate::model::server::MonitoredServer;
use crate::model::teardown::TeardownOutcome;

use super::TeardownService;

impl<'a> TeardownService<'a> {
    /// Tears down one monitored server.
    ///
    /// Each step gates the next: the permission pre-check must pass before the
    /// record is deregistered, and the record must be gone before channel
    /// deletion starts. A failure during channel deletion therefore leaves
    /// orphaned channels without a record, never a record without channels.
    ///
    /// The caller is expected to have rejected the guild's default server
    /// before invoking this; teardown itself does not re-check.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the server is registered in
    /// - `server` - Server to tear down
    ///
    /// # Returns
    /// - `TeardownOutcome` - Exactly one classification of the attempt; never retried
    pub async fn teardown(&self, guild_id: u64, server: &MonitoredServer) -> TeardownOutcome {
        let gaps = self.permission_gaps(server).await;
        if !gaps.is_empty() {
            return TeardownOutcome::PermissionBlocked(gaps);
        }

        let repo = MonitoredServerRepository::new(self.db);
        if let Err(e) = repo.delete(guild_id, server).await {
            tracing::error!(
                "Failed to remove server {} from database for guild {}: {}",
                server.ip,
                guild_id,
                e
            );
            return TeardownOutcome::RecordDeletionFailed;
        }

        let remaining = self.remove_channels(guild_id, server).await;
        if remaining.is_empty() {
            TeardownOutcome::Removed
        } else {
            TeardownOutcome::ChannelsNotDeleted(remaining)
        }
    }
}
