use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

use crate::bot::cooldown::CooldownTracker;

pub mod interaction;
pub mod ready;

/// Discord bot event handler.
pub struct Handler {
    pub db: DatabaseConnection,
    pub cooldowns: CooldownTracker,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            cooldowns: CooldownTracker::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for every interaction delivered by the gateway
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, &self.cooldowns, ctx, interaction).await;
    }
}
