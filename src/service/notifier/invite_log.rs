use chrono::Utc;

use crate::{
    error::AppError,
    model::notification::InviteDetails,
    service::{
        guild_configuration::GuildConfigurationService,
        notifier::{
            builder::build_invite_log_embed, find_text_channel, NotifierService, NotifyOutcome,
            SkipReason,
        },
    },
    util::parse::parse_u64_from_string,
};

impl<'a> NotifierService<'a> {
    /// Logs a newly created invite to the guild's invite log channel.
    ///
    /// The "Channel" field shows the name of the channel the invite points at, or a
    /// channel mention when that channel is not among the guild's channels.
    ///
    /// # Returns
    /// - `Ok(NotifyOutcome::Sent)` - Embed posted
    /// - `Ok(NotifyOutcome::Skipped)` - No log channel configured or it is gone
    /// - `Err(AppError)` - Store, channel lookup or send failed
    pub async fn notify_invite_created(
        &self,
        guild_id: u64,
        invite: &InviteDetails,
    ) -> Result<NotifyOutcome, AppError> {
        let config_service = GuildConfigurationService::new(self.db);

        let Some(config) = config_service.get(&guild_id.to_string()).await? else {
            return Ok(NotifyOutcome::Skipped(SkipReason::NotConfigured));
        };

        let Some(log_channel_id) = config.invite_logs_channel_id else {
            return Ok(NotifyOutcome::Skipped(SkipReason::Incomplete));
        };

        let channel_id = parse_u64_from_string(log_channel_id)?;
        let channels = self.gateway.guild_channels(guild_id).await?;

        if find_text_channel(&channels, channel_id).is_none() {
            return Ok(NotifyOutcome::Skipped(SkipReason::ChannelNotFound(
                channel_id,
            )));
        }

        let channel_name = channels
            .iter()
            .find(|channel| channel.id == invite.channel_id)
            .map(|channel| channel.name.clone())
            .unwrap_or_else(|| format!("<#{}>", invite.channel_id));

        let embed = build_invite_log_embed(invite, &channel_name, Utc::now())?;
        self.gateway.send_embed(channel_id, embed).await?;

        Ok(NotifyOutcome::Sent { channel_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test::{text_channel, RecordingGateway};
    use chrono::TimeZone;
    use serde_json::Value;
    use test_utils::{builder::TestBuilder, factory::guild_configuration::GuildConfigurationFactory};

    const GUILD_ID: u64 = 2000;

    fn invite(channel_id: u64, max_age_secs: u32) -> InviteDetails {
        InviteDetails {
            code: "xyz789".to_string(),
            inviter_tag: Some("mod_person".to_string()),
            channel_id,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            max_age_secs,
        }
    }

    fn field(embed: &Value, name: &str) -> Option<String> {
        embed["fields"]
            .as_array()?
            .iter()
            .find(|field| field["name"] == name)
            .and_then(|field| field["value"].as_str())
            .map(str::to_string)
    }

    /// Tests that a guild without configuration gets nothing.
    ///
    /// Expected: Skipped(NotConfigured)
    #[tokio::test]
    async fn skips_unconfigured_guild() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_guild_configuration_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let gateway = RecordingGateway::new(vec![text_channel(21, "invite-logs")]);

        let outcome = NotifierService::new(db, &gateway, 0)
            .notify_invite_created(GUILD_ID, &invite(22, 0))
            .await?;

        assert_eq!(outcome, NotifyOutcome::Skipped(SkipReason::NotConfigured));
        assert!(gateway.sent().is_empty());

        Ok(())
    }

    /// Tests that welcome settings alone do not enable invite logs.
    ///
    /// Expected: Skipped(Incomplete)
    #[tokio::test]
    async fn skips_without_log_channel() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_guild_configuration_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        GuildConfigurationFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .welcome_channel_id("21")
            .welcome_message("Hi")
            .build()
            .await?;

        let gateway = RecordingGateway::new(vec![text_channel(21, "invite-logs")]);

        let outcome = NotifierService::new(db, &gateway, 0)
            .notify_invite_created(GUILD_ID, &invite(22, 0))
            .await?;

        assert_eq!(outcome, NotifyOutcome::Skipped(SkipReason::Incomplete));

        Ok(())
    }

    /// Tests a full invite log entry.
    ///
    /// Expected: one embed to the log channel naming the origin channel and expiry
    #[tokio::test]
    async fn logs_invite_with_expiry() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_guild_configuration_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        GuildConfigurationFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .invite_logs_channel_id("21")
            .build()
            .await?;

        let gateway = RecordingGateway::new(vec![
            text_channel(21, "invite-logs"),
            text_channel(22, "general"),
        ]);

        let outcome = NotifierService::new(db, &gateway, 0)
            .notify_invite_created(GUILD_ID, &invite(22, 86_400))
            .await?;

        assert_eq!(outcome, NotifyOutcome::Sent { channel_id: 21 });

        let sent = gateway.sent();
        assert_eq!(sent.len(), 1);
        let embed = &sent[0].1;
        assert_eq!(embed["title"], "New Invite Created");
        assert_eq!(field(embed, "Inviter").as_deref(), Some("mod_person"));
        assert_eq!(field(embed, "Code").as_deref(), Some("xyz789"));
        assert_eq!(field(embed, "Channel").as_deref(), Some("general"));
        assert_eq!(
            field(embed, "Expires At").as_deref(),
            Some("2024-06-02T00:00:00.000Z")
        );

        Ok(())
    }

    /// Tests an invite that never expires.
    ///
    /// Expected: Expires At is literally "Never"
    #[tokio::test]
    async fn logs_never_for_permanent_invite() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_guild_configuration_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        GuildConfigurationFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .invite_logs_channel_id("21")
            .build()
            .await?;

        let gateway = RecordingGateway::new(vec![text_channel(21, "invite-logs")]);

        NotifierService::new(db, &gateway, 0)
            .notify_invite_created(GUILD_ID, &invite(21, 0))
            .await?;

        let sent = gateway.sent();
        assert_eq!(field(&sent[0].1, "Expires At").as_deref(), Some("Never"));

        Ok(())
    }

    /// Tests the origin channel fallback.
    ///
    /// Expected: Channel field is a mention of the unknown channel
    #[tokio::test]
    async fn mentions_unknown_origin_channel() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_guild_configuration_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        GuildConfigurationFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .invite_logs_channel_id("21")
            .build()
            .await?;

        let gateway = RecordingGateway::new(vec![text_channel(21, "invite-logs")]);

        NotifierService::new(db, &gateway, 0)
            .notify_invite_created(GUILD_ID, &invite(99, 0))
            .await?;

        let sent = gateway.sent();
        assert_eq!(field(&sent[0].1, "Channel").as_deref(), Some("<#99>"));

        Ok(())
    }

    /// Tests that a deleted log channel is skipped.
    ///
    /// Expected: Skipped(ChannelNotFound)
    #[tokio::test]
    async fn skips_deleted_log_channel() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_guild_configuration_table()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        GuildConfigurationFactory::new(db)
            .guild_id(GUILD_ID.to_string())
            .invite_logs_channel_id("21")
            .build()
            .await?;

        let gateway = RecordingGateway::new(vec![text_channel(22, "general")]);

        let outcome = NotifierService::new(db, &gateway, 0)
            .notify_invite_created(GUILD_ID, &invite(22, 0))
            .await?;

        assert_eq!(
            outcome,
            NotifyOutcome::Skipped(SkipReason::ChannelNotFound(21))
        );
        assert!(gateway.sent().is_empty());

        Ok(())
    }
}
