//! Localized user-facing strings.
//!
//! Message lookup is keyed by the locale Discord reports on each interaction,
//! falling back to English for any locale without a translation. The tables are
//! plain match expressions; commands also pull their name and description
//! localizations from here when registering with Discord.

pub mod interaction;
pub mod unmonitor;
