use super::*;

/// Tests retrieving all servers for a guild.
///
/// Verifies that every server registered for the guild is returned as a domain
/// model, and that servers of other guilds are excluded.
///
/// Expected: Ok with only the guild's servers
#[tokio::test]
async fn returns_servers_for_guild_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.1:25565")
        .build()
        .await?;
    MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.2:25565")
        .build()
        .await?;
    MonitoredServerFactory::new(db)
        .guild_id("222")
        .ip("10.0.0.3:25565")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let servers = repo.get_by_guild_id(111).await?;

    assert_eq!(servers.len(), 2);
    assert!(servers.iter().all(|s| s.ip.starts_with("10.0.0.")));
    assert!(!servers.iter().any(|s| s.ip == "10.0.0.3:25565"));

    Ok(())
}

/// Tests retrieving servers for a guild with none registered.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MonitoredServerRepository::new(db);
    let servers = repo.get_by_guild_id(999).await?;

    assert!(servers.is_empty());

    Ok(())
}

/// Tests that returned servers preserve registration order.
///
/// Expected: Ok with servers ordered by insertion
#[tokio::test]
async fn preserves_registration_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for ip in ["10.1.0.1", "10.1.0.2", "10.1.0.3"] {
        MonitoredServerFactory::new(db)
            .guild_id("111")
            .ip(ip)
            .build()
            .await?;
    }

    let repo = MonitoredServerRepository::new(db);
    let servers = repo.get_by_guild_id(111).await?;

    let ips: Vec<&str> = servers.iter().map(|s| s.ip.as_str()).collect();
    assert_eq!(ips, vec!["10.1.0.1", "10.1.0.2", "10.1.0.3"]);

    Ok(())
}
