//! Domain models shared across the service and data layers.
//!
//! Models in this module are independent of both the database entities and the
//! Discord SDK types. Repositories convert entities into domain models at the
//! data-layer boundary; services operate on domain models only.

pub mod server;
pub mod teardown;
