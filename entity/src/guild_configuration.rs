use sea_orm::entity::prelude::*;

/// Per-guild welcome and invite-log settings.
///
/// At most one row exists per `guild_id`. Every setting column is nullable; a row
/// with all settings unset is still distinct from no row at all.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "guild_configuration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    pub welcome_message: Option<String>,
    pub welcome_channel_id: Option<String>,
    pub welcome_image_url: Option<String>,
    pub invite_logs_channel_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
