//! Narrow interface to the Discord platform.
//!
//! The notifier and the dashboard only need three calls: list a guild's channels,
//! fetch a guild, and post an embed. `DiscordGateway` captures those so the bot can use
//! its gateway `Context` (cache first), the dashboard can use a bare REST `Http`
//! client, and tests can record calls without a network.

use serenity::{
    all::{ChannelId, Context, CreateEmbed, CreateMessage, GuildId, HttpError},
    async_trait,
    http::Http,
};

use crate::{
    error::AppError,
    model::discord::{ChannelSummary, GuildSummary},
};

#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Lists the channels of a guild.
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError>;

    /// Fetches a guild, or `None` when the bot is not a member of it.
    async fn guild(&self, guild_id: u64) -> Result<Option<GuildSummary>, AppError>;

    /// Posts a message with a single embed to a channel.
    async fn send_embed(&self, channel_id: u64, embed: CreateEmbed) -> Result<(), AppError>;
}

#[async_trait]
impl DiscordGateway for Http {
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
        let channels = GuildId::new(guild_id).channels(self).await?;

        let mut channels: Vec<ChannelSummary> =
            channels.values().map(ChannelSummary::from_channel).collect();
        channels.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(channels)
    }

    async fn guild(&self, guild_id: u64) -> Result<Option<GuildSummary>, AppError> {
        match self.get_guild(GuildId::new(guild_id)).await {
            Ok(guild) => Ok(Some(GuildSummary::from_partial_guild(&guild))),
            Err(e) if is_missing_access(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn send_embed(&self, channel_id: u64, embed: CreateEmbed) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(self, CreateMessage::new().embed(embed))
            .await?;

        Ok(())
    }
}

/// Gateway-backed implementation used by the bot.
///
/// Guild data comes from serenity's cache when the guild is cached, otherwise from
/// the REST API.
#[async_trait]
impl DiscordGateway for Context {
    async fn guild_channels(&self, guild_id: u64) -> Result<Vec<ChannelSummary>, AppError> {
        let cached: Option<Vec<ChannelSummary>> = self.cache.guild(GuildId::new(guild_id)).map(
            |guild| {
                guild
                    .channels
                    .values()
                    .map(ChannelSummary::from_channel)
                    .collect()
            },
        );

        match cached {
            Some(channels) => Ok(channels),
            None => DiscordGateway::guild_channels(self.http.as_ref(), guild_id).await,
        }
    }

    async fn guild(&self, guild_id: u64) -> Result<Option<GuildSummary>, AppError> {
        let cached = self
            .cache
            .guild(GuildId::new(guild_id))
            .map(|guild| GuildSummary {
                name: guild.name.clone(),
            });

        match cached {
            Some(guild) => Ok(Some(guild)),
            None => DiscordGateway::guild(self.http.as_ref(), guild_id).await,
        }
    }

    async fn send_embed(&self, channel_id: u64, embed: CreateEmbed) -> Result<(), AppError> {
        DiscordGateway::send_embed(self.http.as_ref(), channel_id, embed).await
    }
}

/// Discord answers 403 or 404 for guilds the bot has not joined.
fn is_missing_access(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            matches!(response.status_code.as_u16(), 403 | 404)
        }
        _ => false,
    }
}
