//! Monitored server factory for creating test server entities.
//!
//! This module provides factory methods for creating monitored server entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test monitored servers with customizable fields.
///
/// Provides a builder pattern for creating monitored server entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::monitored_server::MonitoredServerFactory;
///
/// let server = MonitoredServerFactory::new(&db)
///     .guild_id("987654321")
///     .ip("mc.example.com:25565")
///     .is_default(true)
///     .build()
///     .await?;
/// ```
pub struct MonitoredServerFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    ip: String,
    nickname: Option<String>,
    platform: String,
    category_id: String,
    status_id: String,
    players_id: String,
    is_default: bool,
}

impl<'a> MonitoredServerFactory<'a> {
    /// Creates a new MonitoredServerFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - ip: `"10.0.0.{id}:25565"`
    /// - nickname: `None`
    /// - platform: `"java"`
    /// - category_id / status_id / players_id: distinct auto-generated snowflakes
    /// - is_default: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MonitoredServerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        // Three distinct channel snowflakes per server, derived from the counter.
        let base = 100_000_000_000 + id * 10;
        Self {
            db,
            guild_id: id.to_string(),
            ip: format!("10.0.0.{}:25565", id),
            nickname: None,
            platform: "java".to_string(),
            category_id: base.to_string(),
            status_id: (base + 1).to_string(),
            players_id: (base + 2).to_string(),
            is_default: false,
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: &str) -> Self {
        self.guild_id = guild_id.to_string();
        self
    }

    /// Sets the server IP address.
    pub fn ip(mut self, ip: &str) -> Self {
        self.ip = ip.to_string();
        self
    }

    /// Sets the server nickname.
    pub fn nickname(mut self, nickname: Option<String>) -> Self {
        self.nickname = nickname;
        self
    }

    /// Sets the server platform (`"java"` or `"bedrock"`).
    pub fn platform(mut self, platform: &str) -> Self {
        self.platform = platform.to_string();
        self
    }

    /// Sets the category channel ID.
    pub fn category_id(mut self, category_id: &str) -> Self {
        self.category_id = category_id.to_string();
        self
    }

    /// Sets the status channel ID.
    pub fn status_id(mut self, status_id: &str) -> Self {
        self.status_id = status_id.to_string();
        self
    }

    /// Sets the players channel ID.
    pub fn players_id(mut self, players_id: &str) -> Self {
        self.players_id = players_id.to_string();
        self
    }

    /// Marks the server as the guild's default.
    pub fn is_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Inserts the monitored server entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted entity model
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::monitored_server::Model, DbErr> {
        entity::monitored_server::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            ip: ActiveValue::Set(self.ip),
            nickname: ActiveValue::Set(self.nickname),
            platform: ActiveValue::Set(self.platform),
            category_id: ActiveValue::Set(self.category_id),
            status_id: ActiveValue::Set(self.status_id),
            players_id: ActiveValue::Set(self.players_id),
            is_default: ActiveValue::Set(self.is_default),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a monitored server with default values for the given guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
///
/// # Returns
/// - `Ok(Model)` - The inserted entity model
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::monitored_server::Model, DbErr> {
    MonitoredServerFactory::new(db).guild_id(guild_id).build().await
}
