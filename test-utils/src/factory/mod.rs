//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let server = factory::monitored_server::create_server(&db, "123456789").await?;
//!
//!     // Create with customization
//!     let server = factory::monitored_server::MonitoredServerFactory::new(&db)
//!         .guild_id("123456789")
//!         .ip("mc.example.com")
//!         .nickname(Some("survival".to_string()))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod monitored_server;
