//! Monitored server domain models.
//!
//! Provides the domain model for game servers monitored within a guild, along with
//! the logical kinds of the three Discord channels every monitor owns. Handles
//! conversion between entity models from the database and domain models used in
//! the service layer.

use sea_orm::DbErr;
use std::fmt;

/// Game server platform a monitor polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Java,
    Bedrock,
}

impl Platform {
    /// Parses the storage representation; anything but `"bedrock"` is Java.
    pub fn parse(value: &str) -> Self {
        match value {
            "bedrock" => Self::Bedrock,
            _ => Self::Java,
        }
    }
}

/// Logical kind of a channel owned by a monitored server.
///
/// Every monitor manages three channels: a category grouping the other two, a
/// voice channel showing online status, and a voice channel showing the player
/// count. The kind determines which permissions the bot needs to delete the
/// channel and how the channel is named in user-facing failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Category,
    Status,
    Players,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Category => "Category",
            Self::Status => "Status Channel",
            Self::Players => "Players Channel",
        };
        write!(f, "{}", name)
    }
}

/// Game server monitored in a guild, backed by three managed channels.
///
/// Uniquely identified by `ip` within a guild. The channel IDs are handles into
/// Discord; the record does not own the channels, it only remembers them so they
/// can be torn down when the server is unmonitored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredServer {
    /// Server address, optionally with a port (`"mc.example.com:25565"`).
    pub ip: String,
    /// Optional display nickname chosen by the operator.
    pub nickname: Option<String>,
    /// Which edition of the game the server runs.
    pub platform: Platform,
    /// Category channel grouping the status and players channels.
    pub category_id: u64,
    /// Voice channel displaying the server's online status.
    pub status_id: u64,
    /// Voice channel displaying the server's player count.
    pub players_id: u64,
    /// Whether this server is the guild's default for commands without a target.
    pub is_default: bool,
}

impl MonitoredServer {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Parses string snowflake IDs from the database into u64 values for type safety.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(MonitoredServer)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse a channel ID as u64
    pub fn from_entity(entity: entity::monitored_server::Model) -> Result<Self, DbErr> {
        let parse = |field: &str, value: &str| {
            value
                .parse::<u64>()
                .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
        };

        Ok(Self {
            category_id: parse("category_id", &entity.category_id)?,
            status_id: parse("status_id", &entity.status_id)?,
            players_id: parse("players_id", &entity.players_id)?,
            ip: entity.ip,
            nickname: entity.nickname,
            platform: Platform::parse(&entity.platform),
            is_default: entity.is_default,
        })
    }

    /// Name shown to users in replies and reports: the nickname when set, the IP otherwise.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.ip)
    }

    /// The server's three managed channels with their logical kinds.
    ///
    /// Ordered category first, matching the order permission pre-checks inspect
    /// them. Deletion uses its own order (category last).
    pub fn channels(&self) -> [(ChannelKind, u64); 3] {
        [
            (ChannelKind::Category, self.category_id),
            (ChannelKind::Status, self.status_id),
            (ChannelKind::Players, self.players_id),
        ]
    }
}
