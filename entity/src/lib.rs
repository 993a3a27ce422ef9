//! SeaORM entity definitions for the mcmonitor database schema.

pub mod monitored_server;
pub mod prelude;
