use sea_orm::entity::prelude::*;

/// Monitored game server registered in a guild.
///
/// Discord snowflake IDs are stored as strings and parsed to `u64` at the
/// repository boundary. A server is uniquely identified by (`guild_id`, `ip`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monitored_server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub ip: String,
    pub nickname: Option<String>,
    pub platform: String,
    pub category_id: String,
    pub status_id: String,
    pub players_id: String,
    pub is_default: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
