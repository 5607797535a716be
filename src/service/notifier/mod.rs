//! Event notifier: turns guild events into embeds.
//!
//! Each notification reads the guild's configuration, resolves the target channel
//! among the guild's channels and sends one embed. The notifier never writes to the
//! store. Missing configuration or channels are not errors; they yield
//! `NotifyOutcome::Skipped` with the reason so the bot can log it.

use sea_orm::DatabaseConnection;
use std::fmt;

use crate::{model::discord::ChannelSummary, service::discord::DiscordGateway};

pub mod builder;
pub mod invite_log;
pub mod welcome;

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyOutcome {
    /// An embed was posted to this channel.
    Sent { channel_id: u64 },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The guild has no configuration row.
    NotConfigured,
    /// The row lacks the settings this notification needs.
    Incomplete,
    /// The configured channel is not a text channel of the guild.
    ChannelNotFound(u64),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "guild is not configured"),
            Self::Incomplete => write!(f, "notification settings are incomplete"),
            Self::ChannelNotFound(id) => write!(f, "channel {} not found in guild", id),
        }
    }
}

pub struct NotifierService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn DiscordGateway,
    /// Accent color of welcome embeds.
    welcome_color: u32,
}

impl<'a> NotifierService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        gateway: &'a dyn DiscordGateway,
        welcome_color: u32,
    ) -> Self {
        Self {
            db,
            gateway,
            welcome_color,
        }
    }
}

/// Finds a channel that messages can be posted to.
fn find_text_channel(channels: &[ChannelSummary], channel_id: u64) -> Option<&ChannelSummary> {
    channels
        .iter()
        .find(|channel| channel.id == channel_id && channel.text_based)
}
