use crate::{
    error::AppError,
    service::{
        guild_configuration::GuildConfigurationService,
        notifier::{
            builder::build_welcome_embed, find_text_channel, NotifierService, NotifyOutcome,
            SkipReason,
        },
    },
    util::parse::parse_u64_from_string,
};

impl<'a> NotifierService<'a> {
    /// Greets a member who joined a guild.
    ///
    /// Sends only when the guild has a welcome channel and at least one of message or
    /// image, and the channel is a text channel of the guild.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member joined
    /// - `user_id` - The new member, substituted for `{user}`
    ///
    /// # Returns
    /// - `Ok(NotifyOutcome::Sent)` - Embed posted
    /// - `Ok(NotifyOutcome::Skipped)` - Nothing to send
    /// - `Err(AppError)` - Store, channel lookup or send failed
    pub async fn notify_member_joined(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<NotifyOutcome, AppError> {
        let config_service = GuildConfigurationService::new(self.db);

        let Some(config) = config_service.get(&guild_id.to_string()).await? else {
            return Ok(NotifyOutcome::Skipped(SkipReason::NotConfigured));
        };

        let Some(settings) = config.welcome_settings() else {
            return Ok(NotifyOutcome::Skipped(SkipReason::Incomplete));
        };

        let channel_id = parse_u64_from_string(settings.channel_id.clone())?;
        let channels = self.gateway.guild_channels(guild_id).await?;

        if find_text_channel(&channels, channel_id).is_none() {
            return Ok(NotifyOutcome::Skipped(SkipReason::ChannelNotFound(
                channel_id,
            )));
        }

        let embed = build_welcome_embed(&settings, user_id, self.welcome_color);
        self.gateway.send_embed(channel_id, embed).await?;

        Ok(NotifyOutcome::Sent { channel_id })
    }
}
