//! Guild-wide teardown.

use futures::future::join_all;

use crate::data::monitored_server::MonitoredServerRepository;
use crate::model::server::MonitoredServer;
use crate::model::teardown::{BatchReport, ChannelsRemainServer, PermissionBlockedServer};

use super::TeardownService;

impl<'a> TeardownService<'a> {
    /// Tears down every given server and aggregates the per-server outcomes.
    ///
    /// All servers are processed independently; one server's failure never
    /// blocks another's. The sequencing differs from the single-server path:
    /// after every per-server permission pre-check has settled, one bulk
    /// deregistration covers exactly the servers that passed, and only then do
    /// the channel deletions fan out. A server whose channels subsequently fail
    /// to delete keeps its place in the deregistration batch and is reported
    /// under `channels_remain`.
    ///
    /// # Arguments
    /// - `guild_id` - Guild whose servers are being torn down
    /// - `servers` - Every monitored server in the guild
    ///
    /// # Returns
    /// - `BatchReport` - Every input server classified into exactly one bucket
    pub async fn teardown_all(
        &self,
        guild_id: u64,
        servers: &[MonitoredServer],
    ) -> BatchReport {
        let checks = join_all(servers.iter().map(|server| async move {
            (server, self.permission_gaps(server).await)
        }))
        .await;

        let mut report = BatchReport::default();
        let mut cleared: Vec<&MonitoredServer> = Vec::new();
        for (server, gaps) in checks {
            if gaps.is_empty() {
                cleared.push(server);
            } else {
                report.permission_blocked.push(PermissionBlockedServer {
                    name: server.display_name().to_string(),
                    gaps,
                });
            }
        }

        // Bulk deregistration is fire-and-forget: a database error here is an
        // operator concern and does not reclassify the affected servers.
        let repo = MonitoredServerRepository::new(self.db);
        if let Err(e) = repo.delete_many(guild_id, &cleared).await {
            tracing::error!(
                "Failed to bulk-remove {} servers from database for guild {}: {}",
                cleared.len(),
                guild_id,
                e
            );
        }

        let deletions = join_all(cleared.into_iter().map(|server| async move {
            (server, self.remove_channels(guild_id, server).await)
        }))
        .await;

        for (server, remaining) in deletions {
            if remaining.is_empty() {
                report.unmonitored.push(server.display_name().to_string());
            } else {
                report.channels_remain.push(ChannelsRemainServer {
                    name: server.display_name().to_string(),
                    remaining,
                });
            }
        }

        report
    }
}
