//! Guild configuration factory for seeding `guild_configuration` rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild configurations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_configuration::GuildConfigurationFactory;
///
/// let config = GuildConfigurationFactory::new(&db)
///     .guild_id("987654321")
///     .invite_logs_channel_id("444")
///     .build()
///     .await?;
/// ```
pub struct GuildConfigurationFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    welcome_message: Option<String>,
    welcome_channel_id: Option<String>,
    welcome_image_url: Option<String>,
    invite_logs_channel_id: Option<String>,
}

impl<'a> GuildConfigurationFactory<'a> {
    /// Creates a new factory with a unique guild id and every setting unset.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            welcome_message: None,
            welcome_channel_id: None,
            welcome_image_url: None,
            invite_logs_channel_id: None,
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the welcome message template.
    pub fn welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = Some(message.into());
        self
    }

    /// Sets the welcome channel ID.
    pub fn welcome_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.welcome_channel_id = Some(channel_id.into());
        self
    }

    /// Sets the welcome image URL.
    pub fn welcome_image_url(mut self, url: impl Into<String>) -> Self {
        self.welcome_image_url = Some(url.into());
        self
    }

    /// Sets the invite log channel ID.
    pub fn invite_logs_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.invite_logs_channel_id = Some(channel_id.into());
        self
    }

    /// Builds and inserts the configuration row.
    ///
    /// # Returns
    /// - `Ok(entity::guild_configuration::Model)` - Inserted row
    /// - `Err(DbErr)` - Database error during insert, e.g. duplicate guild id
    pub async fn build(self) -> Result<entity::guild_configuration::Model, DbErr> {
        let now = Utc::now();

        entity::guild_configuration::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            welcome_message: ActiveValue::Set(self.welcome_message),
            welcome_channel_id: ActiveValue::Set(self.welcome_channel_id),
            welcome_image_url: ActiveValue::Set(self.welcome_image_url),
            invite_logs_channel_id: ActiveValue::Set(self.invite_logs_channel_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration with default values.
///
/// Shorthand for `GuildConfigurationFactory::new(db).build().await`.
pub async fn create_guild_configuration(
    db: &DatabaseConnection,
) -> Result<entity::guild_configuration::Model, DbErr> {
    GuildConfigurationFactory::new(db).build().await
}
