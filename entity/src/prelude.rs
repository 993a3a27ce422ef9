pub use super::monitored_server::Entity as MonitoredServer;
