//! Slash command registry.
//!
//! The registry maps command names to handlers and owns the registration
//! payloads submitted to Discord. The dispatcher resolves a [`BotCommand`]
//! before deferring so that unknown names can be ignored without a reply.

pub mod unmonitor;

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::error::AppError;

/// Registered slash commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Unmonitor,
}

impl BotCommand {
    /// Resolves a command by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            unmonitor::NAME => Some(Self::Unmonitor),
            _ => None,
        }
    }

    /// Invokes the command's handler.
    ///
    /// Called exactly once per dispatched interaction; errors propagate to the
    /// dispatcher boundary for logging and the generic failure reply.
    pub async fn execute(
        &self,
        ctx: &Context,
        db: &DatabaseConnection,
        interaction: &CommandInteraction,
    ) -> Result<(), AppError> {
        match self {
            Self::Unmonitor => unmonitor::execute(ctx, db, interaction).await,
        }
    }
}

/// Registration payloads for every command, submitted on ready.
pub fn registrations() -> Vec<CreateCommand> {
    vec![unmonitor::register()]
}
