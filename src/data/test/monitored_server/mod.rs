use crate::data::monitored_server::MonitoredServerRepository;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory::monitored_server::MonitoredServerFactory};

mod delete;
mod delete_many;
mod find_by_ip_or_nickname;
mod find_default;
mod get_by_guild_id;
