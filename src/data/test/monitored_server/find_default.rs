use super::*;

/// Tests finding the guild's default server.
///
/// Expected: Ok with the server flagged as default
#[tokio::test]
async fn finds_default_server() -> Result<(), DbErr> {
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
        .is_default(true)
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_default(111).await?;

    assert!(server.is_some());
    let server = server.unwrap();
    assert_eq!(server.ip, "10.0.0.2:25565");
    assert!(server.is_default);

    Ok(())
}

/// Tests a guild without a default server.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db).guild_id("111").build().await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_default(111).await?;

    assert!(server.is_none());

    Ok(())
}

/// Tests that another guild's default is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn default_is_scoped_to_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_monitor_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MonitoredServerFactory::new(db)
        .guild_id("222")
        .is_default(true)
        .build()
        .await?;

    let repo = MonitoredServerRepository::new(db);
    let server = repo.find_default(111).await?;

    assert!(server.is_none());

    Ok(())
}
