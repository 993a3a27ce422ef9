//! Application error types.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors.
//! Most variants use `#[from]` for automatic conversion with the `?` operator.
//! Errors that a component can meaningfully recover from (permission gaps,
//! per-channel deletion failures) are modeled as outcomes rather than errors;
//! this enum covers the failures that propagate to the dispatcher boundary.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results from gateway or HTTP operations against
    /// Discord.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
