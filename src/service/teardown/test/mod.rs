use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serenity::all::Permissions;
use serenity::async_trait;
use test_utils::{builder::TestBuilder, factory::monitored_server::MonitoredServerFactory};

use crate::channels::{ChannelError, ChannelGateway};
use crate::model::server::{ChannelKind, MonitoredServer};
use crate::model::teardown::TeardownOutcome;
use crate::service::teardown::TeardownService;


/// In-memory channel gateway for teardown tests.
///
/// Channels behave as fully permitted and deletable unless configured otherwise.
/// Deletions are recorded so tests can assert exactly which channels were touched.
struct FakeChannelGateway {
    /// Missing permission sets per channel ID.
    missing: HashMap<u64, Permissions>,
    /// Channels that cannot be resolved at all.
    absent: HashSet<u64>,
    /// Channels whose deletion is rejected.
    failing: HashSet<u64>,
    /// Successfully deleted channel IDs, in completion order.
    deleted: Mutex<Vec<u64>>,
}

impl FakeChannelGateway {
    fn new() -> Self {
        Self {
            missing: HashMap::new(),
            absent: HashSet::new(),
            failing: HashSet::new(),
            deleted: Mutex::new(Vec::new()),
        }
    }

    /// Marks a channel as missing the given permissions.
    fn with_missing(mut self, channel_id: u64, missing: Permissions) -> Self {
        self.missing.insert(channel_id, missing);
        self
    }

    /// Marks a channel as unresolvable.
    fn with_absent(mut self, channel_id: u64) -> Self {
        self.absent.insert(channel_id);
        self
    }

    /// Marks a channel's deletion as failing.
    fn with_failing_delete(mut self, channel_id: u64) -> Self {
        self.failing.insert(channel_id);
        self
    }

    /// Channel IDs deleted so far.
    fn deleted(&self) -> Vec<u64> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChannelGateway for FakeChannelGateway {
    async fn missing_permissions(&self, _kind: ChannelKind, channel_id: u64) -> Permissions {
        self.missing
            .get(&channel_id)
            .copied()
            .unwrap_or_else(Permissions::empty)
    }

    async fn delete(&self, channel_id: u64) -> Result<(), ChannelError> {
        if self.absent.contains(&channel_id) {
            return Err(ChannelError::NotFound { channel_id });
        }
        if self.failing.contains(&channel_id) {
            return Err(ChannelError::Discord(Box::new(serenity::Error::Other(
                "delete rejected",
            ))));
        }
        self.deleted.lock().unwrap().push(channel_id);
        Ok(())
    }
}

/// Inserts a monitored server row and returns its domain model.
///
/// Channel IDs are `base` (category), `base + 1` (status), and `base + 2`
/// (players).
async fn create_server(
    db: &DatabaseConnection,
    guild_id: &str,
    ip: &str,
    nickname: Option<&str>,
    base: u64,
) -> Result<MonitoredServer, DbErr> {
    let entity = MonitoredServerFactory::new(db)
        .guild_id(guild_id)
        .ip(ip)
        .nickname(nickname.map(str::to_string))
        .category_id(&base.to_string())
        .status_id(&(base + 1).to_string())
        .players_id(&(base + 2).to_string())
        .build()
        .await?;

    MonitoredServer::from_entity(entity)
}

/// Number of monitored server rows left in the database.
async fn record_count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::MonitoredServer::find().count(db).await
}
