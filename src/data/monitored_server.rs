use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::model::server::MonitoredServer;

/// Repository for monitored server database operations.
///
/// Provides read and delete operations for a guild's monitored servers, converting
/// between entity models and domain models at the infrastructure boundary. Monitor
/// registration happens elsewhere; this repository covers the lookup and teardown
/// paths.
pub struct MonitoredServerRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> MonitoredServerRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all monitored servers for a guild.
    ///
    /// Converts entity models to domain models at the repository boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Vec<MonitoredServer>)` - List of server domain models in registration order
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<MonitoredServer>, DbErr> {
        let entities = entity::prelude::MonitoredServer::find()
            .filter(entity::monitored_server::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::monitored_server::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(MonitoredServer::from_entity)
            .collect()
    }

    /// Finds a guild's monitored server by IP address or nickname.
    ///
    /// The query string is matched against both identifying fields; IPs are unique
    /// within a guild, so at most one record matches.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    /// - `query` - Server IP address or nickname as supplied by the user
    ///
    /// # Returns
    /// - `Ok(Some(MonitoredServer))` - Matching server domain model
    /// - `Ok(None)` - No server matches the query in this guild
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn find_by_ip_or_nickname(
        &self,
        guild_id: u64,
        query: &str,
    ) -> Result<Option<MonitoredServer>, DbErr> {
        let entity = entity::prelude::MonitoredServer::find()
            .filter(entity::monitored_server::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                Condition::any()
                    .add(entity::monitored_server::Column::Ip.eq(query))
                    .add(entity::monitored_server::Column::Nickname.eq(query)),
            )
            .one(self.db)
            .await?;

        entity.map(MonitoredServer::from_entity).transpose()
    }

    /// Finds the guild's default server, if one is set.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Some(MonitoredServer))` - The server flagged as the guild default
    /// - `Ok(None)` - The guild has no default server
    /// - `Err(DbErr)` - Database error during query or entity conversion failure
    pub async fn find_default(&self, guild_id: u64) -> Result<Option<MonitoredServer>, DbErr> {
        let entity = entity::prelude::MonitoredServer::find()
            .filter(entity::monitored_server::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::monitored_server::Column::IsDefault.eq(true))
            .one(self.db)
            .await?;

        entity.map(MonitoredServer::from_entity).transpose()
    }

    /// Deletes a single monitored server record by its IP.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    /// - `server` - Server domain model whose record should be removed
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: u64, server: &MonitoredServer) -> Result<(), DbErr> {
        entity::prelude::MonitoredServer::delete_many()
            .filter(entity::monitored_server::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::monitored_server::Column::Ip.eq(&server.ip))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes multiple monitored server records in one statement.
    ///
    /// Used by the guild-wide teardown path to deregister every server that passed
    /// its permission pre-check in a single bulk operation.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    /// - `servers` - Server domain models whose records should be removed
    ///
    /// # Returns
    /// - `Ok(())` - Records deleted (no-op for an empty slice)
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete_many(
        &self,
        guild_id: u64,
        servers: &[&MonitoredServer],
    ) -> Result<(), DbErr> {
        if servers.is_empty() {
            return Ok(());
        }

        let ips: Vec<&str> = servers.iter().map(|server| server.ip.as_str()).collect();

        entity::prelude::MonitoredServer::delete_many()
            .filter(entity::monitored_server::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::monitored_server::Column::Ip.is_in(ips))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
