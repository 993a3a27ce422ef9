use super::*;
use crate::model::server::MonitoredServer;

/// Tests deleting a single server record.
///
/// Verifies that the record matching the server's IP is removed and that
/// other servers in the guild are untouched.
///
/// Expected: Ok with one record removed
#[tokio::test]
async fn deletes_server_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.1:25565")
        .build()
        .await?;
    MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.2:25565")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = MonitoredServer::from_entity(target)?;
    repo.delete(111, &server).await?;

    let remaining = entity::prelude::MonitoredServer::find()
        .filter(entity::monitored_server::Column::GuildId.eq("111"))
        .all(db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].ip, "10.0.0.2:25565");

    Ok(())
}

/// Tests that deletion is scoped to the requesting guild.
///
/// A server with the same IP registered in another guild must survive.
///
/// Expected: Ok with the other guild's record intact
#[tokio::test]
async fn delete_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.1:25565")
        .build()
        .await?;
    MonitoredServerFactory::new(db)
        .guild_id("222")
        .ip("10.0.0.1:25565")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = MonitoredServer::from_entity(target)?;
    repo.delete(111, &server).await?;

    let count = entity::prelude::MonitoredServer::find()
        .filter(entity::monitored_server::Column::GuildId.eq("222"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting a server that was already removed.
///
/// Expected: Ok (idempotent no-op)
#[tokio::test]
async fn deleting_missing_record_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.1:25565")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = MonitoredServer::from_entity(target)?;
    repo.delete(111, &server).await?;
    repo.delete(111, &server).await?;

    let count = entity::prelude::MonitoredServer::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
