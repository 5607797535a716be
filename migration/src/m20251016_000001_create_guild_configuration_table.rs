use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfiguration::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfiguration::Id))
                    .col(string(GuildConfiguration::GuildId))
                    .col(string_null(GuildConfiguration::WelcomeMessage))
                    .col(string_null(GuildConfiguration::WelcomeChannelId))
                    .col(string_null(GuildConfiguration::WelcomeImageUrl))
                    .col(string_null(GuildConfiguration::InviteLogsChannelId))
                    .col(timestamp_with_time_zone(GuildConfiguration::CreatedAt))
                    .col(timestamp_with_time_zone(GuildConfiguration::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_guild_configuration_guild_id")
                    .table(GuildConfiguration::Table)
                    .col(GuildConfiguration::GuildId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_guild_configuration_guild_id")
                    .table(GuildConfiguration::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildConfiguration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GuildConfiguration {
    Table,
    Id,
    GuildId,
    WelcomeMessage,
    WelcomeChannelId,
    WelcomeImageUrl,
    InviteLogsChannelId,
    CreatedAt,
    UpdatedAt,
}
