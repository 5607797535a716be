use chrono::{DateTime, Utc};

/// Welcome and invite-log settings of one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfiguration {
    /// Discord guild ID (stored as String).
    pub guild_id: String,
    /// Welcome template; `{user}` is replaced by the member mention.
    pub welcome_message: Option<String>,
    /// Channel receiving welcome embeds.
    pub welcome_channel_id: Option<String>,
    /// Image attached to welcome embeds.
    pub welcome_image_url: Option<String>,
    /// Channel receiving invite-creation embeds.
    pub invite_logs_channel_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildConfiguration {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_configuration::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            welcome_message: entity.welcome_message,
            welcome_channel_id: entity.welcome_channel_id,
            welcome_image_url: entity.welcome_image_url,
            invite_logs_channel_id: entity.invite_logs_channel_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Returns the welcome settings when a welcome notification should be sent.
    ///
    /// A notification needs a channel and at least one of message or image.
    pub fn welcome_settings(&self) -> Option<WelcomeSettings> {
        let channel_id = self.welcome_channel_id.clone()?;

        if self.welcome_message.is_none() && self.welcome_image_url.is_none() {
            return None;
        }

        Some(WelcomeSettings {
            channel_id,
            message: self.welcome_message.clone(),
            image_url: self.welcome_image_url.clone(),
        })
    }
}

/// Welcome settings that are complete enough to send a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeSettings {
    pub channel_id: String,
    pub message: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update of a guild configuration.
///
/// Each field is tri-state:
/// - `None` - not provided, the stored value is kept
/// - `Some(None)` - clear the stored value
/// - `Some(Some(value))` - store `value`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGuildConfigurationParam {
    pub welcome_message: Option<Option<String>>,
    pub welcome_channel_id: Option<Option<String>>,
    pub welcome_image_url: Option<Option<String>>,
    pub invite_logs_channel_id: Option<Option<String>>,
}

impl UpdateGuildConfigurationParam {
    /// Returns true when no field was provided.
    pub fn is_empty(&self) -> bool {
        self.welcome_message.is_none()
            && self.welcome_channel_id.is_none()
            && self.welcome_image_url.is_none()
            && self.invite_logs_channel_id.is_none()
    }
}
