//! Database repository layer.
//!
//! This module contains repository structs that handle database operations (CRUD) for
//! each domain in the application. Repositories use SeaORM entity models internally and
//! return domain models to maintain separation between the data layer and business
//! logic layer.

pub mod monitored_server;

#[cfg(test)]
mod test;
