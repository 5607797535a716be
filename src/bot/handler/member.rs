use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Member};

use crate::service::notifier::{NotifierService, NotifyOutcome};

/// Handles the guild_member_addition event by sending the guild's welcome embed
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    welcome_color: u32,
    ctx: Context,
    new_member: Member,
) {
    let guild_id = new_member.guild_id.get();
    let user_id = new_member.user.id.get();

    let notifier = NotifierService::new(db, &ctx, welcome_color);

    match notifier.notify_member_joined(guild_id, user_id).await {
        Ok(NotifyOutcome::Sent { channel_id }) => {
            tracing::info!(
                "Welcomed {} in guild {} (channel {})",
                new_member.user.tag(),
                guild_id,
                channel_id
            );
        }
        Ok(NotifyOutcome::Skipped(reason)) => {
            tracing::debug!("No welcome for guild {}: {}", guild_id, reason);
        }
        Err(e) => {
            tracing::error!("Failed to send welcome in guild {}: {}", guild_id, e);
        }
    }
}
