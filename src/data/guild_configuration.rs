//! Guild configuration repository: the configuration store.
//!
//! The store has exactly two operations, `find_by_guild_id` and `upsert`; there is
//! no delete. Upserts run as a single `INSERT .. ON CONFLICT DO UPDATE`
//! statement, so concurrent writes to the same guild resolve last-write-wins without
//! ever creating a second row.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use entity::guild_configuration::{ActiveModel, Column};

use crate::model::guild_configuration::{GuildConfiguration, UpdateGuildConfigurationParam};

pub struct GuildConfigurationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigurationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration row of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as a string
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfiguration))` - Row exists
    /// - `Ok(None)` - Guild was never configured
    /// - `Err(DbErr)` - Database unreachable or query failed
    pub async fn find_by_guild_id(
        &self,
        guild_id: &str,
    ) -> Result<Option<GuildConfiguration>, DbErr> {
        let entity = entity::prelude::GuildConfiguration::find()
            .filter(Column::GuildId.eq(guild_id))
            .one(self.db)
            .await?;

        Ok(entity.map(GuildConfiguration::from_entity))
    }

    /// Creates the guild's row or merges the provided fields into it.
    ///
    /// Only fields present in `param` are written; the others keep their stored
    /// value (or stay NULL on insert). `updated_at` always moves, `created_at` is
    /// only set on insert.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as a string
    /// - `param` - Partial update; see `UpdateGuildConfigurationParam`
    ///
    /// # Returns
    /// - `Ok(GuildConfiguration)` - Full row after the write
    /// - `Err(DbErr)` - Database unreachable or statement failed
    pub async fn upsert(
        &self,
        guild_id: &str,
        param: UpdateGuildConfigurationParam,
    ) -> Result<GuildConfiguration, DbErr> {
        let now = Utc::now();

        let mut model = ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        let mut update_columns = vec![Column::UpdatedAt];

        if let Some(value) = param.welcome_message {
            model.welcome_message = ActiveValue::Set(value);
            update_columns.push(Column::WelcomeMessage);
        }
        if let Some(value) = param.welcome_channel_id {
            model.welcome_channel_id = ActiveValue::Set(value);
            update_columns.push(Column::WelcomeChannelId);
        }
        if let Some(value) = param.welcome_image_url {
            model.welcome_image_url = ActiveValue::Set(value);
            update_columns.push(Column::WelcomeImageUrl);
        }
        if let Some(value) = param.invite_logs_channel_id {
            model.invite_logs_channel_id = ActiveValue::Set(value);
            update_columns.push(Column::InviteLogsChannelId);
        }

        let entity = entity::prelude::GuildConfiguration::insert(model)
            .on_conflict(
                OnConflict::column(Column::GuildId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(GuildConfiguration::from_entity(entity))
    }
}
