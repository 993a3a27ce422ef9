//! Teardown outcome and batch report models.
//!
//! A teardown attempt classifies each server into exactly one outcome; the batch
//! orchestrator aggregates per-server outcomes into a consolidated report. Neither
//! type triggers retries; partial failures are surfaced, not repaired.

use serenity::all::Permissions;

use crate::model::server::ChannelKind;

/// Permissions the bot is missing on one of a server's channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPermissionGap {
    /// Which of the three managed channels is affected.
    pub kind: ChannelKind,
    /// The capability set required for deletion that the bot does not hold.
    pub missing: Permissions,
}

impl ChannelPermissionGap {
    /// Renders the missing capability names for user-facing reports.
    pub fn missing_names(&self) -> String {
        self.missing
            .iter_names()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a single server's teardown attempt.
///
/// Exactly one outcome per server per attempt. The ordering guarantees of the
/// teardown pipeline mean `ChannelsNotDeleted` implies the record is already
/// gone, while `PermissionBlocked` and `RecordDeletionFailed` imply no mutation
/// of channels occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeardownOutcome {
    /// Record deregistered and all three channels deleted.
    Removed,
    /// One or more channels are missing required permissions; nothing was mutated.
    PermissionBlocked(Vec<ChannelPermissionGap>),
    /// The persistence record could not be deleted; channels were not touched.
    RecordDeletionFailed,
    /// The record is gone but the listed channels could not be deleted.
    ChannelsNotDeleted(Vec<ChannelKind>),
}

/// Server listed in a batch report as blocked by missing permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionBlockedServer {
    /// Display name (nickname or IP).
    pub name: String,
    /// Per-channel missing permission detail.
    pub gaps: Vec<ChannelPermissionGap>,
}

/// Server listed in a batch report as deregistered with channels left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelsRemainServer {
    /// Display name (nickname or IP).
    pub name: String,
    /// Channels that survived the deletion attempt.
    pub remaining: Vec<ChannelKind>,
}

/// Consolidated outcome of a guild-wide teardown.
///
/// Every input server lands in exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Servers whose record and channels were all removed.
    pub unmonitored: Vec<String>,
    /// Servers left fully intact because a permission pre-check failed.
    pub permission_blocked: Vec<PermissionBlockedServer>,
    /// Servers whose record was removed but whose channels (partially) remain.
    pub channels_remain: Vec<ChannelsRemainServer>,
}

impl BatchReport {
    /// True when every server was removed cleanly.
    pub fn is_clean(&self) -> bool {
        self.permission_blocked.is_empty() && self.channels_remain.is_empty()
    }
}
