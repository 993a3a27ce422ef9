use super::*;
use crate::model::server::MonitoredServer;

/// Tests bulk deletion of a subset of a guild's servers.
///
/// Verifies that exactly the listed servers are removed while the rest of the
/// guild's records survive.
///
/// Expected: Ok with only the listed records removed
#[tokio::test]
async fn deletes_only_listed_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut servers = Vec::new();
    for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
        let entity = MonitoredServerFactory::new(db)
            .guild_id("111")
            .ip(ip)
            .build()
            .await?;
        servers.push(MonitoredServer::from_entity(entity)?);
    }

    let repo = MonitoredServerRepository::new(db);
    let batch: Vec<&MonitoredServer> = vec![&servers[0], &servers[2]];
    repo.delete_many(111, &batch).await?;

    let remaining = entity::prelude::MonitoredServer::find()
        .filter(entity::monitored_server::Column::GuildId.eq("111"))
        .all(db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].ip, "10.0.0.2");

    Ok(())
}

/// Tests bulk deletion with an empty batch.
///
/// Expected: Ok with no records touched
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db).guild_id("111").build().await?;

    let repo = MonitoredServerRepository::new(db);
    repo.delete_many(111, &[]).await?;

    let count = entity::prelude::MonitoredServer::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that bulk deletion is scoped to the requesting guild.
///
/// Expected: Ok with other guilds' records intact
#[tokio::test]
async fn bulk_delete_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.1")
        .build()
        .await?;
    MonitoredServerFactory::new(db)
        .guild_id("222")
        .ip("10.0.0.1")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = MonitoredServer::from_entity(entity)?;
    repo.delete_many(111, &[&server]).await?;

    let count = entity::prelude::MonitoredServer::find()
        .filter(entity::monitored_server::Column::GuildId.eq("222"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
