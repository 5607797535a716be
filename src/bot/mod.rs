//! Discord bot that posts welcome and invite-log embeds.
//!
//! The bot only reads guild configuration; all writes happen through the dashboard.
//! Each event is handled independently and failures are logged, never surfaced to
//! Discord.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel cache used to resolve configured channels
//! - `GUILD_MEMBERS` - Member join events (privileged intent)
//! - `GUILD_INVITES` - Invite creation events
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
