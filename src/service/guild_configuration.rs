//! Guild configuration service: validated access to the configuration store.
//!
//! Both processes go through this service. The bot only calls `get`; the dashboard
//! calls `get` to pre-fill forms and `upsert` when a form is submitted. Every write is
//! validated here so the repository can stay a thin sea-orm wrapper.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    data::guild_configuration::GuildConfigurationRepository,
    error::AppError,
    model::guild_configuration::{GuildConfiguration, UpdateGuildConfigurationParam},
    util::parse::is_snowflake,
};

/// Discord's limit on embed descriptions, which is where the welcome message ends up.
pub const WELCOME_MESSAGE_MAX_CHARS: usize = 4096;

pub struct GuildConfigurationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigurationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the configuration of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfiguration))` - Guild has a row
    /// - `Ok(None)` - Guild was never configured
    /// - `Err(AppError::StoreUnavailable)` - Database unreachable
    pub async fn get(&self, guild_id: &str) -> Result<Option<GuildConfiguration>, AppError> {
        let repo = GuildConfigurationRepository::new(self.db);

        let config = repo.find_by_guild_id(guild_id).await?;

        Ok(config)
    }

    /// Validates and writes a partial update, creating the row if needed.
    ///
    /// Nothing is written when any provided field is invalid.
    ///
    /// # Returns
    /// - `Ok(GuildConfiguration)` - Row after the write
    /// - `Err(AppError::Validation)` - A field was rejected
    /// - `Err(AppError::StoreUnavailable)` - Database unreachable
    pub async fn upsert(
        &self,
        guild_id: &str,
        param: UpdateGuildConfigurationParam,
    ) -> Result<GuildConfiguration, AppError> {
        validate(guild_id, &param)?;

        let repo = GuildConfigurationRepository::new(self.db);

        let config = repo.upsert(guild_id, param).await?;

        Ok(config)
    }
}

fn validate(guild_id: &str, param: &UpdateGuildConfigurationParam) -> Result<(), AppError> {
    validate_snowflake("guild id", guild_id)?;

    if let Some(Some(message)) = &param.welcome_message {
        let length = message.chars().count();
        if length > WELCOME_MESSAGE_MAX_CHARS {
            return Err(AppError::Validation {
                field: "welcome message",
                reason: format!(
                    "must be at most {} characters, got {}",
                    WELCOME_MESSAGE_MAX_CHARS, length
                ),
            });
        }
    }

    if let Some(Some(channel_id)) = &param.welcome_channel_id {
        validate_snowflake("welcome channel", channel_id)?;
    }

    if let Some(Some(url)) = &param.welcome_image_url {
        validate_image_url(url)?;
    }

    if let Some(Some(channel_id)) = &param.invite_logs_channel_id {
        validate_snowflake("invite log channel", channel_id)?;
    }

    Ok(())
}

fn validate_snowflake(field: &'static str, value: &str) -> Result<(), AppError> {
    if is_snowflake(value) {
        return Ok(());
    }

    Err(AppError::Validation {
        field,
        reason: format!("'{}' is not a Discord ID", value),
    })
}

fn validate_image_url(value: &str) -> Result<(), AppError> {
    let url = Url::parse(value).map_err(|e| AppError::Validation {
        field: "welcome image URL",
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::Validation {
            field: "welcome image URL",
            reason: format!("scheme '{}' is not allowed, use http or https", scheme),
        }),
    }
}
