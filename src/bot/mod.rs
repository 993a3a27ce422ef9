//! Discord bot integration.
//!
//! This module provides the bot side of the application: the gateway client, the
//! event handlers that dispatch slash commands, the per-user command cooldowns,
//! and the slash command implementations themselves.
//!
//! # Gateway Intents
//!
//! The bot requires only the `GUILDS` intent, which populates the guild and
//! channel caches used for permission pre-checks and channel deletion. Slash
//! command interactions are delivered regardless of intents.

pub mod commands;
pub mod cooldown;
pub mod handler;
pub mod messaging;
pub mod start;
