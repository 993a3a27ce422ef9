use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonitoredServer::Table)
                    .if_not_exists()
                    .col(pk_auto(MonitoredServer::Id))
                    .col(string(MonitoredServer::GuildId))
                    .col(string(MonitoredServer::Ip))
                    .col(string_null(MonitoredServer::Nickname))
                    .col(string(MonitoredServer::Platform))
                    .col(string(MonitoredServer::CategoryId))
                    .col(string(MonitoredServer::StatusId))
                    .col(string(MonitoredServer::PlayersId))
                    .col(boolean(MonitoredServer::IsDefault))
                    .to_owned(),
            )
            .await?;

        // A server is uniquely identified by its IP within a guild.
        manager
            .create_index(
                Index::create()
                    .name("idx_monitored_server_guild_id_ip")
                    .table(MonitoredServer::Table)
                    .col(MonitoredServer::GuildId)
                    .col(MonitoredServer::Ip)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonitoredServer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MonitoredServer {
    Table,
    Id,
    GuildId,
    Ip,
    Nickname,
    Platform,
    CategoryId,
    StatusId,
    PlayersId,
    IsDefault,
}
