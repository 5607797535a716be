use crate::{
    data::guild_configuration::GuildConfigurationRepository,
    model::guild_configuration::UpdateGuildConfigurationParam,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod upsert;
