use super::*;

/// Tests finding a server by its IP address.
///
/// Expected: Ok with the matching server
#[tokio::test]
async fn finds_by_ip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("mc.example.com:25565")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_by_ip_or_nickname(111, "mc.example.com:25565").await?;

    assert!(server.is_some());
    assert_eq!(server.unwrap().ip, "mc.example.com:25565");

    Ok(())
}

/// Tests finding a server by its nickname.
///
/// Expected: Ok with the matching server
#[tokio::test]
async fn finds_by_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db)
        .guild_id("111")
        .ip("10.0.0.1:25565")
        .nickname(Some("survival".to_string()))
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_by_ip_or_nickname(111, "survival").await?;

    assert!(server.is_some());
    assert_eq!(server.unwrap().ip, "10.0.0.1:25565");

    Ok(())
}

/// Tests that lookup is scoped to the requesting guild.
///
/// A server registered in another guild must not be found, even when the
/// query matches its IP exactly.
///
/// Expected: Ok(None)
#[tokio::test]
async fn does_not_match_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db)
        .guild_id("222")
        .ip("10.0.0.1:25565")
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_by_ip_or_nickname(111, "10.0.0.1:25565").await?;

    assert!(server.is_none());

    Ok(())
}

/// Tests lookup with a query matching nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_query() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db).guild_id("111").build().await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_by_ip_or_nickname(111, "no-such-server").await?;

    assert!(server.is_none());

    Ok(())
}
